use rat_mask::{EditDirection, MaskOptions, MaskResult, TranslationTable, apply};

fn rev(v: &str, m: &str) -> MaskResult {
    apply(v, m, EditDirection::Rtol, TranslationTable::default_table())
}

#[test]
fn test_money() {
    let r = rev("123456", "#.##0,00");
    assert_eq!(r.formatted, "1.234,56");
    assert!(r.complete);

    let r = rev("75", "#.##0,00");
    assert_eq!(r.formatted, "0,75");

    let r = rev("100000000", "#.##0,00");
    assert_eq!(r.formatted, "1.000.000,00");
    assert!(r.complete);

    // two digits always go to the fraction.
    let r = rev("1000000", "#.##0,00");
    assert_eq!(r.formatted, "10.000,00");
    assert!(r.complete);
}

#[test]
fn test_money_formatted_input() {
    // separators in the input are dropped and regenerated.
    let r = rev("1.234,56", "#.##0,00");
    assert_eq!(r.formatted, "1.234,56");

    let r = rev("R$ 12.345,6", "#.##0,00");
    assert_eq!(r.formatted, "1.234,56");
}

#[test]
fn test_money_typing() {
    // digits typed one after the other into a currency field.
    let mut value = String::new();
    let mut shown = Vec::new();
    for c in "123456".chars() {
        value.push(c);
        let r = rev(&value, "#.##0,00");
        shown.push(r.formatted.clone());
        value = r.formatted;
    }
    assert_eq!(
        shown,
        vec!["0,01", "0,12", "1,23", "12,34", "123,45", "1.234,56"]
    );
}

#[test]
fn test_money_fraction() {
    let r = rev("12345", "#.##0,000");
    assert_eq!(r.formatted, "12,345");

    let r = rev("9", "#,0");
    assert_eq!(r.formatted, "0,9");
}

#[test]
fn test_money_prefix() {
    // literals before the separator are not written.
    let r = rev("123456", "$ #.##0,00");
    assert_eq!(r.formatted, "1.234,56");
}

#[test]
fn test_multiple_commas() {
    // first ',' is the decimal separator, the rest counts as fraction.
    let r = rev("123456", "#,00,0");
    assert_eq!(r.formatted, "12,3456");
}

#[test]
fn test_grouped() {
    let r = rev("1234567", "#.##0");
    assert_eq!(r.formatted, "1.234.567");
    assert!(r.complete);

    let r = rev("123456", "000.000");
    assert_eq!(r.formatted, "123.456");
    assert!(r.complete);

    let r = rev("1234", "00-00");
    assert_eq!(r.formatted, "12-34");
    assert!(r.complete);
}

#[test]
fn test_grouped_incomplete() {
    let r = rev("123", "00-00");
    assert_eq!(r.formatted, "1-23");
    assert!(!r.complete);

    // input left over
    let r = rev("12345", "00-00");
    assert_eq!(r.formatted, "23-45");
    assert!(!r.complete);
}

#[test]
fn test_options() {
    let opt = MaskOptions::new("#.##0,00").reverse(true);
    let r = apply("123456", &opt.mask, opt.direction(), &opt.translation);
    assert_eq!(r.formatted, "1.234,56");
}

#[test]
fn test_empty() {
    let r = rev("abc", "#.##0,00");
    assert_eq!(r.formatted, "");
    assert!(!r.complete);
}
