//! Signup form example.
//!
//! Simulates a user filling in a small form and prints the element tree after
//! each turn. Reconciliation details are logged to `signup.log`.

use std::fs::File;

use formdom::{Document, Element};
use formguard::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("signup.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let language = std::env::args().nth(1).unwrap_or_else(|| "en_US".to_string());
    let translations = Translations::for_code(&language)
        .with_json_overrides(r#"{"valueNoExist": "Pick a city from the list"}"#)?;

    let mut form = Form::new()
        .control(
            "name",
            FormControl::new("")
                .rule(required)
                .rule(has_white_space_line)
                .rule(max_length(12)),
        )
        .control("age", FormControl::new("").rule(only_number))
        .control(
            "city",
            FormControl::new("").rule(introduced_value_exists(["NY", "LN", "BCN"], None)),
        );

    let mut doc = Document::new(Element::div().id("signup").children([
        field_group("name", Element::input("").id("name").max_length(12)),
        field_group("age", Element::input("").id("age")),
        field_group("city", Element::select("").id("city")),
    ]));

    let mut validator = FormValidator::new(translations);
    let options = ValidationOptions::new().show_max_length_warning();
    validator.validate_form(&mut form, options);
    validator.run_pending(&mut form, &mut doc);
    println!("initial:\n{}\n", doc.root());

    for (field, value) in [
        ("name", "   "),
        ("age", "4x"),
        ("city", "Tokyo"),
        ("name", "Ada Lovelace"),
        ("age", "36"),
        ("city", "LN"),
    ] {
        doc.set_value(field, value);
        form.input(field, value);
        validator.run_pending(&mut form, &mut doc);
        println!("{field} = {value:?} -> {:?}\n{}\n", validator.field_state(field), doc.root());
    }

    // Submit: force every field dirty and show whatever is still wrong.
    let mut submit = Form::new().control("age", FormControl::new("").rule(required));
    validator.validate_form(&mut submit, ValidationOptions::new().mark_fields_as_dirty());
    validator.run_pending(&mut submit, &mut doc);
    println!("submit:\n{}", doc.root());

    Ok(())
}

fn field_group(name: &str, input: Element) -> Element {
    Element::div()
        .id(format!("{name}-group"))
        .child(Element::label(name).id(format!("{name}-label")))
        .child(input)
}
