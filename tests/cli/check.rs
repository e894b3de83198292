use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_check_valid_tables() -> Result<()> {
    let test = CliTest::with_greetings()?;
    test.write_file("tables/errors.csv", "key,en,it\noops,Oops,Ahia\n")?;

    let (code, stdout, _) = run(test.check_command().arg("tables"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("2 tables OK"));
    assert!(stdout.contains("2 languages"));
    Ok(())
}

#[test]
fn test_check_writes_nothing() -> Result<()> {
    let test = CliTest::with_greetings()?;

    let (code, _, _) = run(test.check_command().arg("tables"))?;

    assert_eq!(code, 0);
    assert!(!test.has_file("AUTOGEN_FILE_tables.elm"));
    Ok(())
}

#[test]
fn test_check_reports_duplicate_keys() -> Result<()> {
    let test = CliTest::with_greetings()?;
    test.write_file("tables/more.csv", "key,en,it\nhello,Hi,Ehila\n")?;

    let (code, _, stderr) = run(test.check_command().arg("tables"))?;

    assert_eq!(code, 1);
    assert!(stderr.contains("duplicate entry key 'hello'"));
    assert!(stderr.contains("'greetings'"));
    assert!(stderr.contains("'more'"));
    Ok(())
}

#[test]
fn test_check_broken_row_exits_1() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tables/broken.csv", "key,en\nlonely\n")?;

    let (code, _, stderr) = run(test.check_command().arg("tables"))?;

    assert_eq!(code, 1);
    assert!(stderr.contains("broken.csv"));
    Ok(())
}

#[test]
fn test_check_verbose_lists_tables() -> Result<()> {
    let test = CliTest::with_greetings()?;

    let (code, stdout, _) = run(test.check_command().arg("tables").arg("--verbose"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("greetings: 1 entries"));
    Ok(())
}
