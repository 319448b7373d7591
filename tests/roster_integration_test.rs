use anyhow::Result;
use regcheck::utils::validation::Validate;
use regcheck::{LocalStorage, RegError, RosterConfig, RosterEngine, RosterPipeline};
use std::io::Read;
use tempfile::TempDir;

const ROSTER: &str = "\
Full Name,Email Address,Mobile,DOB,Category
Achieng Otieno,achieng@example.com,0712 345 678,2013-09-15,U13
Kip Rotich,kip@example,0812345678,2009-05-01,U17
Wanjiru Kamau,wanjiru@example.com.,+254112345678,2015-01-20,
Baraka Mwangi,baraka@example.com,0112345678,not-a-date,U11
";

fn write_config(dir: &TempDir, extra_output: &str) -> Result<String> {
    let base = dir.path().to_str().unwrap().replace('\\', "/");
    std::fs::write(dir.path().join("students.csv"), ROSTER)?;

    let config = format!(
        r#"
[roster]
name = "county-games-2026"
input_path = "{base}/students.csv"
age_group_format = "standard"
reference_date = "2026-06-01"

[columns]
name = "Full Name"
email = "Email Address"
phone = "Mobile"
date_of_birth = "DOB"
age_group = "Category"

[output]
output_path = "{base}/reports"
formats = ["csv", "json"]
{extra_output}
"#
    );
    let config_path = dir.path().join("roster.toml");
    std::fs::write(&config_path, config)?;
    Ok(config_path.to_str().unwrap().to_string())
}

#[tokio::test]
async fn roster_check_writes_reports() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, "")?;

    let config = RosterConfig::from_file(&config_path)?;
    config.validate()?;

    let pipeline = RosterPipeline::new(LocalStorage::new(String::new()), config);
    let run = RosterEngine::new(pipeline).run().await?;

    assert_eq!(run.summary.total, 4);
    assert_eq!(run.summary.valid, 2);
    assert_eq!(run.summary.invalid, 2);
    assert_eq!(run.summary.email_failures, 1);
    assert_eq!(run.summary.phone_failures, 1);
    assert_eq!(run.summary.age_group_failures, 1);

    let reports = temp_dir.path().join("reports");
    let csv = std::fs::read_to_string(reports.join("roster_report.csv"))?;
    assert!(csv.contains("Achieng Otieno,true,,true,,+254712345678,12,U13,,true"));
    assert!(csv.contains("Invalid date of birth: not-a-date"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(reports.join("roster_report.json"))?)?;
    assert_eq!(json["roster"], "county-games-2026");
    assert_eq!(json["reference_date"], "2026-06-01");
    assert_eq!(json["rows"][2]["age_group"], "U11");
    assert_eq!(json["rows"][1]["age_group"], "U17");

    Ok(())
}

#[tokio::test]
async fn roster_check_bundles_zip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        "[output.compression]\nenabled = true\nfilename = \"roster.zip\"",
    )?;

    let config = RosterConfig::from_file(&config_path)?;
    config.validate()?;

    let pipeline = RosterPipeline::new(LocalStorage::new(String::new()), config);
    let run = RosterEngine::new(pipeline).run().await?;

    assert!(run.output.ends_with("reports/roster.zip"));

    let zip_data = std::fs::read(temp_dir.path().join("reports").join("roster.zip"))?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data))?;
    assert_eq!(archive.len(), 2);

    let mut csv_file = archive.by_name("roster_report.csv")?;
    let mut csv_content = String::new();
    csv_file.read_to_string(&mut csv_content)?;
    assert!(csv_content.starts_with("row,name,email_valid"));

    Ok(())
}

#[tokio::test]
async fn roster_with_wrong_columns_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, "")?;

    let mut config = RosterConfig::from_file(&config_path)?;
    config.columns.phone = Some("Telephone".to_string());

    let pipeline = RosterPipeline::new(LocalStorage::new(String::new()), config);
    let err = RosterEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, RegError::ProcessingError { .. }));
    assert!(err.to_string().contains("Telephone"));
    Ok(())
}
