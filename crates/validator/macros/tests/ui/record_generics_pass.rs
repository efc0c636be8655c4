use fieldguard::Record;

#[derive(Record)]
struct Labeled<'a, T> {
    #[validate(required, maxLen = 8)]
    label: &'a str,
    #[validate(max = 10)]
    value: T,
    #[validate(required)]
    extra: Option<T>,
}

fn main() {
    let labeled = Labeled {
        label: "count",
        value: 11_u32,
        extra: None::<u32>,
    };
    let results = fieldguard::validate(&labeled);
    assert!(results[0].valid);
    assert_eq!(results[1].message, "value: Value exceeds the maximum allowed");
    assert_eq!(results[2].message, "extra: Field is required");

    let boxed: Box<dyn Record> = Box::new(Labeled {
        label: "",
        value: 1_i8,
        extra: Some(1_i8),
    });
    assert!(!fieldguard::validate(&boxed)[0].valid);
}
