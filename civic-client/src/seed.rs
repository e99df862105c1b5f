//! Seeded local data for the Pindra block
//!
//! Used whenever the external sources have nothing. Village ids line up
//! across the villages, census and pradhan tables.

use shared::models::{
    Complaint, ComplaintStatus, Member, PopulationRecord, PradhanRecord, Scheme, Village,
};

/// (id, name, wards)
const VILLAGES: &[(u32, &str, u32)] = &[
    (1, "पिण्डरा", 12),
    (2, "बाबतपुर", 9),
    (3, "खालिसपुर", 7),
    (4, "हिब्रनपुर", 8),
    (5, "रामपुर", 5),
    (6, "फूलपुर", 7),
    (7, "सिंधोरा", 11),
    (8, "कठिरांव", 9),
    (9, "बसनी", 4),
    (10, "तरसड़ा", 6),
];

/// Census 2011: (village id, population, males, females)
const CENSUS_2011: &[(u32, u64, u64, u64)] = &[
    (1, 2500, 1300, 1200),
    (2, 1800, 950, 850),
    (3, 1200, 620, 580),
    (4, 1600, 830, 770),
    (5, 900, 470, 430),
    (6, 1400, 730, 670),
    (7, 2100, 1100, 1000),
    (8, 1700, 880, 820),
    (9, 800, 420, 380),
    (10, 1100, 570, 530),
];

/// (village id, pradhan name, phone)
const PRADHANS: &[(u32, &str, &str)] = &[
    (1, "राजेश सिंह", "9876543210"),
    (2, "विनोद शर्मा", "9876543211"),
    (3, "कमल किशोर", "9876543212"),
    (4, "राजीव यादव", "9876543213"),
    (5, "शरद कुमार", "9876543214"),
    (6, "गीता सिंह", "9876543215"),
    (7, "मोहन प्रसाद", "9876543216"),
    (8, "प्रमोद सिंह", "9876543217"),
    (9, "विजय कुमार", "9876543218"),
    (10, "अजय सिंह", "9876543219"),
];

pub fn villages() -> Vec<Village> {
    VILLAGES
        .iter()
        .map(|&(id, name, wards)| {
            let pradhan = pradhan(id);
            Village {
                id,
                name: name.to_string(),
                population: census_2011(id).map(|c| c.population).unwrap_or(0),
                wards,
                sarpanch: pradhan.as_ref().map(|p| p.name.clone()),
                phone: pradhan.and_then(|p| p.phone),
                description: format!("{name} गाँव, पिंड्रा ब्लॉक, वाराणसी"),
            }
        })
        .collect()
}

pub fn census_2011(village_id: u32) -> Option<PopulationRecord> {
    CENSUS_2011
        .iter()
        .find(|(id, ..)| *id == village_id)
        .map(|&(village_id, population, males, females)| PopulationRecord {
            village_id,
            population,
            males,
            females,
            year: 2011,
        })
}

pub fn pradhan(village_id: u32) -> Option<PradhanRecord> {
    PRADHANS
        .iter()
        .find(|(id, ..)| *id == village_id)
        .map(|&(village_id, name, phone)| PradhanRecord {
            village_id,
            name: name.to_string(),
            phone: Some(phone.to_string()),
            ..PradhanRecord::unknown(village_id)
        })
}

/// Members who serve the whole constituency rather than one village
pub fn constituency_members() -> Vec<Member> {
    vec![Member {
        id: 0,
        name: "डॉ. अवधेश सिंह".to_string(),
        role: "क्षेत्रीय विधायक".to_string(),
        ward: "पिण्डरा विधानसभा, वाराणसी".to_string(),
        village_id: None,
        phone: Some("9415200000".to_string()),
        avatar: Some("👨‍💼".to_string()),
    }]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: 1,
            name: "प्रधानमंत्री आवास योजना (ग्रामीण)".into(),
            description: "ग्रामीण परिवारों को पक्का घर बनाने के लिए आर्थिक सहायता".into(),
            benefits: strings(&["₹1,20,000 तक की सहायता", "शौचालय निर्माण के लिए अलग राशि"]),
            eligibility: strings(&["कच्चे मकान में रहने वाले परिवार", "SECC सूची में नाम"]),
            deadline: None,
            category: "आवास".into(),
            link: Some("https://pmayg.nic.in/".into()),
        },
        Scheme {
            id: 2,
            name: "पीएम किसान सम्मान निधि".into(),
            description: "किसानों को हर साल तीन किस्तों में आय सहायता".into(),
            benefits: strings(&["₹6,000 प्रति वर्ष", "सीधे बैंक खाते में"]),
            eligibility: strings(&["खेती योग्य भूमि वाले किसान परिवार"]),
            deadline: None,
            category: "कृषि".into(),
            link: Some("https://pmkisan.gov.in/".into()),
        },
        Scheme {
            id: 3,
            name: "आयुष्मान भारत".into(),
            description: "गरीब परिवारों के लिए स्वास्थ्य बीमा".into(),
            benefits: strings(&["₹5 लाख तक का मुफ्त इलाज", "सूचीबद्ध अस्पतालों में कैशलेस सुविधा"]),
            eligibility: strings(&["SECC सूची में शामिल परिवार", "राशन कार्ड धारक"]),
            deadline: None,
            category: "स्वास्थ्य".into(),
            link: Some("https://pmjay.gov.in/".into()),
        },
        Scheme {
            id: 4,
            name: "महात्मा गांधी नरेगा".into(),
            description: "ग्रामीण परिवारों को साल में 100 दिन का रोजगार".into(),
            benefits: strings(&["100 दिन का गारंटीशुदा काम", "15 दिन में मजदूरी भुगतान"]),
            eligibility: strings(&["ग्रामीण क्षेत्र के वयस्क सदस्य", "जॉब कार्ड"]),
            deadline: None,
            category: "रोजगार".into(),
            link: Some("https://nrega.nic.in/".into()),
        },
        Scheme {
            id: 5,
            name: "प्रधानमंत्री उज्ज्वला योजना".into(),
            description: "गरीब परिवारों की महिलाओं को मुफ्त एलपीजी कनेक्शन".into(),
            benefits: strings(&["मुफ्त गैस कनेक्शन", "पहला सिलेंडर मुफ्त"]),
            eligibility: strings(&["बीपीएल परिवार की महिला", "18 वर्ष से अधिक आयु"]),
            deadline: Some("31/03/2027".into()),
            category: "महिला".into(),
            link: Some("https://pmuy.gov.in/".into()),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn complaint(
    id: i64,
    tracking_id: &str,
    title: &str,
    description: &str,
    date: &str,
    village_id: u32,
    status: ComplaintStatus,
    category: &str,
    votes: u32,
) -> Complaint {
    let village = VILLAGES
        .iter()
        .find(|(vid, ..)| *vid == village_id)
        .map(|(_, name, _)| name.to_string())
        .unwrap_or_default();
    Complaint {
        id,
        tracking_id: tracking_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: "10:30".to_string(),
        user_name: shared::models::ANONYMOUS_USER.to_string(),
        village,
        village_id: Some(village_id),
        status,
        category: category.to_string(),
        votes,
        image: None,
    }
}

pub fn complaints() -> Vec<Complaint> {
    vec![
        complaint(
            1,
            "CMP-PND000001",
            "हैंडपंप खराब",
            "प्राथमिक विद्यालय के पास का हैंडपंप एक हफ्ते से बंद है",
            "02/09/2026",
            1,
            ComplaintStatus::InProgress,
            "पानी",
            24,
        ),
        complaint(
            2,
            "CMP-PND000002",
            "सड़क पर गड्ढे",
            "बाबतपुर मोड़ से बाजार तक सड़क टूटी है",
            "28/08/2026",
            2,
            ComplaintStatus::Pending,
            "सड़क",
            41,
        ),
        complaint(
            3,
            "CMP-PND000003",
            "स्ट्रीट लाइट बंद",
            "पंचायत भवन के सामने की लाइट महीने भर से नहीं जल रही",
            "15/08/2026",
            3,
            ComplaintStatus::Resolved,
            "बिजली",
            12,
        ),
        complaint(
            4,
            "CMP-PND000004",
            "नाली की सफाई",
            "बारिश में नाली का पानी घरों में घुस रहा है",
            "10/09/2026",
            7,
            ComplaintStatus::Pending,
            "सफाई",
            18,
        ),
    ]
}
