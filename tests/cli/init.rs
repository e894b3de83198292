use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains(".locgenrc.json"));

    let config = test.read_file(".locgenrc.json")?;
    assert!(config.contains("\"outputDir\""));
    assert!(config.contains("\"extension\""));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locgenrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));
    Ok(())
}
