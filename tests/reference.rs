use std::{env, fs, process};

use compass_fit::{DatasetSpec, DispatchSpec, FitConfig, LineParams, SessionBuilder};

#[tokio::test(flavor = "multi_thread")]
async fn reference_fit_with_defaults() {
    let session = SessionBuilder::new().build(FitConfig::default()).unwrap();
    let report = session.run().await.unwrap();

    assert!((report.params.m - 1.2).abs() < 1e-6, "m = {}", report.params.m);
    assert!((report.params.c - 20.83).abs() < 1e-6, "c = {}", report.params.c);
    assert!((report.error - 9.864).abs() < 1e-3, "error = {}", report.error);
    assert_eq!(report.iterations, 1083);
    assert_eq!(
        report.to_string(),
        "minimum m,c is 1.200000,20.830000 with error 9.863999"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn config_and_dataset_files() {
    let dir = env::temp_dir();
    let data_path = dir.join(format!("compass_fit_points_{}.json", process::id()));
    let config_path = dir.join(format!("compass_fit_config_{}.json", process::id()));

    fs::write(&data_path, "[[0, 1], [1, 3], [2, 5], [3, 7]]").unwrap();

    let config = FitConfig {
        initial_m: 0.,
        initial_c: 0.,
        step_size: 0.25,
        dispatch: DispatchSpec::Pool,
        dataset: DatasetSpec::Local {
            path: data_path.clone(),
        },
        ..FitConfig::default()
    };
    fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = FitConfig::from_json_file(&config_path).unwrap();
    assert_eq!(loaded, config);

    let report = SessionBuilder::new().build(loaded).unwrap().run().await;

    fs::remove_file(&data_path).unwrap();
    fs::remove_file(&config_path).unwrap();

    let report = report.unwrap();
    assert_eq!(report.params, LineParams::new(2., 1.));
    assert_eq!(report.error, 0.);
}
