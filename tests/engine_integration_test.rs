use anyhow::Result;
use game_matrix::adapters::report::ReportFormat;
use game_matrix::config::toml_config::TomlConfig;
use game_matrix::{GameError, LocalStorage, MiniLpOracle, RunConfig, SolveEngine, SolveError};
use tempfile::TempDir;

#[tokio::test]
async fn test_end_to_end_csv_to_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("game.csv"), "2,1\n1,3\n").await?;

    let config = RunConfig {
        output: Some("reports/game.json".to_string()),
        pretty: true,
        ..RunConfig::new("game.csv")
    };
    let engine = SolveEngine::new(LocalStorage::new(temp_dir.path()), MiniLpOracle::new(), config);
    let outcome = engine.run().await?;

    assert_eq!(outcome.output_path.as_deref(), Some("reports/game.json"));

    let written = tokio::fs::read(temp_dir.path().join("reports/game.json")).await?;
    let report: serde_json::Value = serde_json::from_slice(&written)?;

    assert_eq!(report["type"], "MixedStrategy");
    let value = report["gameValue"].as_f64().unwrap();
    assert!((value - 5.0 / 3.0).abs() < 1e-4);
    let p: Vec<f64> = serde_json::from_value(report["player1Strategy"].clone())?;
    assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-6);
    assert!(report["narration"].as_array().unwrap().len() >= 4);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(
        temp_dir.path().join("game.json"),
        r#"{"matrix": [[1.0, 1.05], [1.05, 1.0]]}"#,
    )
    .await?;

    let config_path = temp_dir.path().join("solver.toml");
    tokio::fs::write(
        &config_path,
        "[solver]\nsaddle_tolerance = 0.1\n\n[output]\nformat = \"text\"\npath = \"game.txt\"\n",
    )
    .await?;
    let file_config = TomlConfig::from_file(&config_path)?;
    file_config.validate_config()?;

    let config = RunConfig {
        output: file_config.output.path.clone(),
        format: file_config.output.format,
        solver: file_config.solver,
        ..RunConfig::new("game.json")
    };
    assert_eq!(config.format, ReportFormat::Text);

    let engine = SolveEngine::new(LocalStorage::new(temp_dir.path()), MiniLpOracle::new(), config);
    let outcome = engine.run().await?;

    // |α − β| = 0.05 is inside the configured tolerance
    assert!(outcome.solution.is_pure());
    let text = tokio::fs::read_to_string(temp_dir.path().join("game.txt")).await?;
    assert!(text.contains("α = β"));
    assert!(text.contains("Game value: 1.000000"));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_rejects_jagged_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("bad.csv"), "1,2\n3\n").await?;

    let engine = SolveEngine::new(
        LocalStorage::new(temp_dir.path()),
        MiniLpOracle::new(),
        RunConfig::new("bad.csv"),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(
        err,
        GameError::Solve(SolveError::InvalidMatrix { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_unsupported_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = SolveEngine::new(
        LocalStorage::new(temp_dir.path()),
        MiniLpOracle::new(),
        RunConfig::new("game.xlsx"),
    );

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, GameError::UnsupportedFormat { .. }));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_missing_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = SolveEngine::new(
        LocalStorage::new(temp_dir.path()),
        MiniLpOracle::new(),
        RunConfig::new("missing.json"),
    );

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, GameError::IoError(_)));
    Ok(())
}
