//! WhatsApp bill summary

use rust_decimal::Decimal;

use crate::money::format_rupees;

use super::{BillData, format_date};

/// Hindi bill summary (plain text, not yet URL encoded)
pub fn whatsapp_message(shop_name: &str, bill: &BillData) -> String {
    let mut lines = vec![
        format!("🏪 *{}* 🏪", shop_name),
        String::new(),
        format!("नमस्ते {} जी! 👋", bill.customer.name),
        String::new(),
        "आपका बिल तैयार है:".to_string(),
        String::new(),
        "📊 *बिल विवरण:*".to_string(),
        format!("• कपड़ों की संख्या: {}", bill.total_items()),
        format!("• कुल राशि: ₹{}", format_rupees(bill.total_amount())),
        format!("• पिछली बकाया: ₹{}", format_rupees(bill.total_due)),
    ];
    if bill.advance_credit > Decimal::ZERO {
        lines.push(format!("• जमा राशि: ₹{}", format_rupees(bill.advance_credit)));
    }
    lines.push(format!("• बाकी राशि: ₹{}", format_rupees(bill.net_balance)));
    lines.push(String::new());
    lines.push(format!("📅 बिल तिथि: {}", format_date(bill.generated_at)));
    lines.push(String::new());
    lines.push(if bill.net_balance > Decimal::ZERO {
        "⏰ कृपया जल्द से जल्द भुगतान करें 🙏".to_string()
    } else {
        "✅ आपका खाता सेटल है!".to_string()
    });
    lines.push(String::new());
    lines.push("धन्यवाद! 🎉".to_string());
    lines.join("\n")
}

/// `https://wa.me/<digits>?text=<encoded message>`
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}
