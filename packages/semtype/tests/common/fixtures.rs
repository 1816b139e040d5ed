//! Test frame and column fixtures

use semtype::{Column, Frame, Value};

/// Ten textual columns in different scripts, three rows each. Only
/// `digits` parses.
pub fn fixture_mixed_scripts_frame() -> Frame {
    Frame::from_columns(vec![
        Column::from_values("latin", ["orange", "apple", "pear"]),
        Column::from_values("cyrillic", ["Кириллица", "гласность", "демократија"]),
        Column::from_values("mixed", ["Кириллица", "soep", "демократија"]),
        Column::from_values("burmese", ["ရေကြီးခြင်း", "စက်သင်ယူမှု", "ဉာဏ်ရည်တု"]),
        Column::from_values("digits", ["01234", "121223", "12312"]),
        Column::from_values("specials", ["$", "%^&*(", "!!!~``"]),
        Column::from_values("whitespace", ["\t", "\n", " "]),
        Column::from_values("jiddisch", ["רעכט צו לינקס", "שאָסיי 61", "פּיצאַ איז אָנגענעם"]),
        Column::from_values("arabic", ["بوب ديلان", "باتي فالنتين", "السيد الدف الرجل"]),
        Column::from_values("playing_cards", ["🂶", "🃁", "🂻"]),
    ])
}

pub fn fixture_complex_strings() -> Column {
    Column::from_values("complex", ["(1+2j)", "(3+4j)"])
}

pub fn fixture_digit_strings() -> Column {
    Column::from_values("digits", ["1", "2", "3"])
}

/// One column per leaf type, already in native values
pub fn fixture_native_frame() -> Frame {
    Frame::from_columns(vec![
        Column::from_values("ints", [1i64, -2, 0]),
        Column::from_values("floats", [1.5, 0.0, -3.25]),
        Column::from_values("bools", [true, false, true]),
        Column::from_values("text", ["a b", "c!", "d+"]),
        Column::new("mixed", vec![Value::Int(1), Value::from("x"), Value::Null]),
        Column::new("empty", vec![Value::Null, Value::Null, Value::Null]),
    ])
}
