use std::collections::HashMap;
use std::sync::Arc;

use fieldguard::Record;

#[derive(Record)]
pub struct AvengersMember {
    #[validate(required, maxLen = 50)]
    pub name: String,
    #[validate(min = 18, max = 100)]
    pub age: i32,
    #[validate(required, email)]
    pub email: String,
}

#[derive(Record)]
struct Everything {
    #[validate(required = "true", max_len = 10, min_len = "2")]
    text: Box<str>,
    #[validate(max = "not a number", min = -5)]
    signed: i64,
    #[validate(max = 255u16)]
    unsigned: u16,
    #[validate(required)]
    flag: bool,
    #[validate(required, email)]
    contact: Option<String>,
    #[validate(required)]
    tags: Vec<String>,
    #[validate(required)]
    headers: HashMap<String, String>,
    #[validate(min = 0)]
    ratio: f32,
    shared: Arc<str>,
    #[validate(rename = "Type")]
    r#type: char,
}

#[derive(Record)]
struct Empty {}

fn main() {
    let member = AvengersMember {
        name: "Iron Man".to_owned(),
        age: 45,
        email: "ironman@example.com".to_owned(),
    };
    let results = fieldguard::validate(&member);
    assert_eq!(results.len(), 3);
    assert!(fieldguard::all_valid(&results));

    let everything = Everything {
        text: "ok".into(),
        signed: -1,
        unsigned: 1,
        flag: true,
        contact: None,
        tags: vec![],
        headers: HashMap::new(),
        ratio: 0.5,
        shared: Arc::from("x"),
        r#type: 'a',
    };
    let results = fieldguard::validate(&everything);
    assert_eq!(results.len(), 10);
    assert_eq!(results[9].field, "Type");

    assert!(fieldguard::validate(&Empty {}).is_empty());
}
