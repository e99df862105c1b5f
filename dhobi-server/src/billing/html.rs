//! Printable HTML bill

use std::fmt::Write;

use html_escape::encode_text;
use rust_decimal::Decimal;

use shared::models::OrderStatus;

use crate::money::format_rupees;

use super::{BillData, format_date};

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: Arial, sans-serif; background-color: #f5f5f5; padding: 20px; }
    .bill-container { background-color: white; max-width: 600px; margin: 0 auto; padding: 30px; border: 2px solid #333; }
    .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #FFD700; padding-bottom: 15px; }
    .shop-name { font-size: 24px; font-weight: bold; color: #333; }
    .bill-title { font-size: 14px; color: #666; margin-top: 5px; }
    .bill-number { font-size: 12px; color: #999; margin-top: 5px; }
    .customer-info { margin-bottom: 20px; padding: 15px; background-color: #f9f9f9; border-left: 3px solid #FFD700; }
    .info-label { font-weight: bold; color: #333; font-size: 12px; }
    .info-value { color: #666; font-size: 14px; margin-top: 3px; }
    table { width: 100%; margin-bottom: 20px; font-size: 13px; }
    th { background-color: #FFD700; color: #000; padding: 10px; text-align: left; font-weight: bold; border: 1px solid #333; }
    td { padding: 8px; border-bottom: 1px solid #ddd; }
    .summary { margin-top: 20px; padding-top: 15px; border-top: 2px solid #333; }
    .summary-row { display: flex; justify-content: space-between; margin-bottom: 10px; font-size: 14px; }
    .summary-row.total { font-weight: bold; font-size: 16px; color: #FFD700; background-color: #333; padding: 10px; margin-top: 10px; }
    .summary-row.paid { background-color: #28a745; }
    .footer { text-align: center; margin-top: 30px; font-size: 12px; color: #999; border-top: 1px solid #ddd; padding-top: 15px; }
    .balance-alert { margin-top: 15px; padding: 10px; background-color: #fff3cd; border-left: 3px solid #ffc107; }
    @media print { body { background-color: white; } .bill-container { border: none; } }
"#;

/// Render the bill as a standalone HTML document
///
/// All customer supplied text is escaped.
pub fn render_html(shop_name: &str, bill: &BillData) -> String {
    let shop = encode_text(shop_name);
    let mut rows = String::new();
    for order in &bill.orders {
        let status = match order.status {
            OrderStatus::Completed => "✓",
            OrderStatus::Pending => "Pending",
        };
        let _ = write!(
            rows,
            "\n      <tr><td>{}</td><td style=\"text-align: center;\">{}</td><td style=\"text-align: right;\">₹{}</td><td style=\"text-align: right;\">₹{}</td><td>{}</td></tr>",
            format_date(order.created_at),
            order.quantity,
            format_rupees(order.rate_per_item),
            format_rupees(order.total_amount),
            status,
        );
    }

    let total_row = if bill.net_balance > Decimal::ZERO {
        format!(
            "<div class=\"summary-row total\"><span>TOTAL DUE:</span><span>₹{}</span></div>",
            format_rupees(bill.net_balance)
        )
    } else {
        format!(
            "<div class=\"summary-row total paid\"><span>PAID UP ✓</span><span>₹{}</span></div>",
            format_rupees(bill.net_balance.abs())
        )
    };

    let alert = if bill.net_balance > Decimal::ZERO {
        format!(
            "<div class=\"balance-alert\"><strong>⚠️ Outstanding Balance: ₹{}</strong><br>Please settle the amount at your earliest convenience.</div>",
            format_rupees(bill.net_balance)
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{shop} - Bill</title>
  <style>{style}</style>
</head>
<body>
  <div class="bill-container">
    <div class="header">
      <div class="shop-name">🏪 {shop}</div>
      <div class="bill-title">CLEANING &amp; PRESSING BILL</div>
      <div class="bill-number">Bill Date: {bill_date}</div>
    </div>
    <div class="customer-info">
      <div><div class="info-label">CUSTOMER NAME:</div><div class="info-value">{name}</div></div>
      <div style="margin-top: 10px;"><div class="info-label">PHONE:</div><div class="info-value">{phone}</div></div>
      <div style="margin-top: 10px;"><div class="info-label">CUSTOMER SINCE:</div><div class="info-value">{since}</div></div>
    </div>
    <table>
      <thead><tr><th>Date</th><th>Items</th><th>Rate</th><th>Amount</th><th>Status</th></tr></thead>
      <tbody>{rows}
      </tbody>
    </table>
    <div class="summary">
      <div class="summary-row"><span>Total Items:</span><span>{total_items}</span></div>
      <div class="summary-row"><span>Total Amount:</span><span>₹{total_amount}</span></div>
      <div class="summary-row"><span>Advance Credit:</span><span>₹{advance}</span></div>
      {total_row}
    </div>
    {alert}
    <div class="footer">
      <p>Thank you for your business! 🙏</p>
      <p>Generated on {generated}</p>
      <p style="margin-top: 10px; color: #666;">For queries, contact: {shop}</p>
    </div>
  </div>
</body>
</html>
"#,
        shop = shop,
        style = STYLE,
        bill_date = format_date(bill.generated_at),
        name = encode_text(&bill.customer.name),
        phone = encode_text(&bill.customer.phone),
        since = format_date(bill.customer.created_at),
        rows = rows,
        total_items = bill.total_items(),
        total_amount = format_rupees(bill.total_amount()),
        advance = format_rupees(bill.advance_credit),
        total_row = total_row,
        alert = alert,
        generated = bill
            .generated_at
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y, %H:%M:%S"),
    )
}
