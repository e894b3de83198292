use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_generate_greetings_module() -> Result<()> {
    let test = CliTest::with_greetings()?;

    let (code, stdout, _) = run(test.generate_command().arg("tables"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("generated"));
    assert!(stdout.contains("AUTOGEN_FILE_tables.elm"));

    let module = test.read_file("AUTOGEN_FILE_tables.elm")?;
    assert!(module.starts_with("module AUTOGEN_FILE_tables exposing (..)"));
    assert!(module.contains("type Language\n    = En\n    | It"));
    assert!(module.contains("type alias Translation =\n    { en : String, it : String }"));
    assert!(module.contains("type IntlString\n    = Hello"));
    assert!(
        module.contains(
            "        Hello ->\n            getTranslation language <| Translation \"Hello\" \"Ciao\""
        )
    );
    Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<()> {
    let test = CliTest::with_greetings()?;
    test.write_file("tables/errors.csv", "key,en,it\noops,Oops,Ahia\n")?;

    let (code, _, _) = run(test.generate_command().arg("tables"))?;
    assert_eq!(code, 0);
    let first = test.read_file("AUTOGEN_FILE_tables.elm")?;

    let (code, _, _) = run(test.generate_command().arg("tables"))?;
    assert_eq!(code, 0);
    let second = test.read_file("AUTOGEN_FILE_tables.elm")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_output_flag_overrides_destination() -> Result<()> {
    let test = CliTest::with_greetings()?;
    test.write_file("generated/.keep", "")?;

    let (code, _, _) = run(test
        .generate_command()
        .arg("tables")
        .args(["-o", "generated"]))?;

    assert_eq!(code, 0);
    assert!(test.has_file("generated/AUTOGEN_FILE_tables.elm"));
    assert!(!test.has_file("AUTOGEN_FILE_tables.elm"));
    Ok(())
}

#[test]
fn test_config_file_sets_output_dir() -> Result<()> {
    let test = CliTest::with_greetings()?;
    test.write_file(".locgenrc.json", r#"{ "outputDir": "generated" }"#)?;
    test.write_file("generated/.keep", "")?;

    let (code, _, _) = run(test.generate_command().arg("tables"))?;

    assert_eq!(code, 0);
    assert!(test.has_file("generated/AUTOGEN_FILE_tables.elm"));
    Ok(())
}

#[test]
fn test_row_with_single_column_exits_1() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tables/broken.csv", "key,en\nhello,Hello\nlonely\n")?;

    let (code, _, stderr) = run(test.generate_command().arg("tables"))?;

    assert_eq!(code, 1);
    assert!(stderr.contains("broken.csv"));
    assert!(stderr.contains("row 3"));
    assert!(!test.has_file("AUTOGEN_FILE_tables.elm"));
    Ok(())
}

#[test]
fn test_translation_count_mismatch_exits_1_with_counts() -> Result<()> {
    let test = CliTest::with_greetings()?;
    test.write_file("tables/extra.csv", "key,en,it\nwave,Hi,Ciao,Hola\n")?;

    let (code, _, stderr) = run(test.generate_command().arg("tables"))?;

    assert_eq!(code, 1);
    assert!(stderr.contains("extra"));
    assert!(stderr.contains("3 translation(s)"));
    assert!(stderr.contains("expected 2"));
    Ok(())
}

#[test]
fn test_header_mismatch_exits_1() -> Result<()> {
    let test = CliTest::with_greetings()?;
    test.write_file("tables/other.csv", "key,en,de\nbye,Bye,Tschuess\n")?;

    let (code, _, stderr) = run(test.generate_command().arg("tables"))?;

    assert_eq!(code, 1);
    assert!(stderr.contains("other.csv"));
    assert!(stderr.contains("does not match"));
    Ok(())
}

#[test]
fn test_missing_source_directory_exits_2() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.generate_command().arg("nowhere"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("nowhere"));
    Ok(())
}

#[test]
fn test_if_stale_skips_fresh_output() -> Result<()> {
    let test = CliTest::with_greetings()?;

    let (code, _, _) = run(test.generate_command().arg("tables").arg("--if-stale"))?;
    assert_eq!(code, 0);

    let (code, stdout, _) = run(test.generate_command().arg("tables").arg("--if-stale"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("up to date"));
    Ok(())
}
