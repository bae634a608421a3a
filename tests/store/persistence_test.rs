#[cfg(test)]
mod tests {
    use std::fs;

    use crate::utils::{open_store, record_at, temp_store_path, timestamp};
    use lab_reports::{Catalog, Classification, CorruptStorePolicy, LabConfig, LabReportError, ReportStore};
    use proptest::prelude::*;

    #[test]
    fn test_append_then_load_preserves_order() {
        let (_dir, path) = temp_store_path();
        let first = record_at("Nimal", "Blood Pressure Test", &[("Systolic", "145"), ("Diastolic", "70")], timestamp(9, 0, 0));
        let second = record_at("Nimal", "Diabetes Test", &[("Fasting Glucose", "110"), ("HbA1c", "5.0")], timestamp(9, 15, 0));

        let mut store = open_store(&path);
        store.append("0771234567", first.clone()).unwrap();
        store.append("0771234567", second.clone()).unwrap();

        let reloaded = open_store(&path);
        let reports = reloaded.reports_for("0771234567");
        assert_eq!(reports, &[first, second]);
        assert!(reports[0].timestamp() < reports[1].timestamp());
        assert_eq!(reports[1].result(), Classification::Midrange);
    }

    #[test]
    fn test_unknown_phone_has_no_reports() {
        let (_dir, path) = temp_store_path();
        let mut store = open_store(&path);
        store
            .append("0771234567", record_at("A", "CRP", &[], timestamp(8, 0, 0)))
            .unwrap();

        assert!(store.reports_for("0719999999").is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.report_count(), 1);
    }

    #[test]
    fn test_file_layout() {
        let (_dir, path) = temp_store_path();
        let mut store = open_store(&path);
        store
            .append(
                "0771234567",
                record_at("Kamal", "ESR", &[("Erythrocyte Sedimentation Rate", "12")], timestamp(10, 20, 30)),
            )
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let report = &json["0771234567"][0];
        assert_eq!(report["name"], "Kamal");
        assert_eq!(report["test"], "ESR");
        assert_eq!(report["values"]["Erythrocyte Sedimentation Rate"], "12");
        assert_eq!(report["result"], "-");
        assert_eq!(report["timestamp"], "2024-03-15 10:20:30");
    }

    #[test]
    fn test_reads_document_written_elsewhere() {
        let (_dir, path) = temp_store_path();
        fs::write(
            &path,
            r#"{
    "0771234567": [
        {
            "name": "Saman",
            "test": "HIV Test",
            "values": {"RMD": "90000", "MDD": "20000", "SSI": "1"},
            "result": "Positive",
            "timestamp": "2023-12-01 14:02:11"
        }
    ]
}"#,
        )
        .unwrap();

        let store = open_store(&path);
        let reports = store.reports_for("0771234567");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].patient_name(), "Saman");
        assert_eq!(reports[0].result(), Classification::Positive);
    }

    #[test]
    fn test_corrupt_file_treated_as_empty() {
        let (_dir, path) = temp_store_path();
        fs::write(&path, "{ this is not json").unwrap();

        let mut store = open_store(&path);
        assert!(store.is_empty());

        // The next append overwrites the corrupt document
        store
            .append("0771234567", record_at("A", "CRP", &[], timestamp(8, 0, 0)))
            .unwrap();
        assert_eq!(open_store(&path).report_count(), 1);
    }

    #[test]
    fn test_corrupt_file_fails_under_strict_policy() {
        let (_dir, path) = temp_store_path();
        fs::write(&path, "[1, 2, 3]").unwrap();

        let config = LabConfig::default()
            .with_data_file(&path)
            .with_corrupt_store_policy(CorruptStorePolicy::Fail);
        let err = ReportStore::load(config).unwrap_err();
        assert!(matches!(err, LabReportError::CorruptStore { .. }));
    }

    #[test]
    fn test_non_utf8_file_follows_corrupt_store_policy() {
        let (_dir, path) = temp_store_path();
        fs::write(&path, [0x7b, 0xff, 0xfe, 0x7d]).unwrap();

        let store = ReportStore::load(LabConfig::default().with_data_file(&path)).unwrap();
        assert!(store.is_empty());

        let config = LabConfig::default()
            .with_data_file(&path)
            .with_corrupt_store_policy(CorruptStorePolicy::Fail);
        let err = ReportStore::load(config).unwrap_err();
        assert!(matches!(err, LabReportError::CorruptStore { .. }));
    }

    #[test]
    fn test_refresh_picks_up_other_writer() {
        let (_dir, path) = temp_store_path();
        let mut reader = open_store(&path);
        let mut writer = open_store(&path);

        writer
            .append("0771234567", record_at("A", "CRP", &[], timestamp(8, 0, 0)))
            .unwrap();
        assert!(reader.reports_for("0771234567").is_empty());

        reader.refresh().unwrap();
        assert_eq!(reader.reports_for("0771234567").len(), 1);
    }

    #[test]
    fn test_last_writer_wins() {
        let (_dir, path) = temp_store_path();
        let mut first = open_store(&path);
        let mut second = open_store(&path);

        first
            .append("0771111111", record_at("A", "CRP", &[], timestamp(8, 0, 0)))
            .unwrap();
        second
            .append("0772222222", record_at("B", "ESR", &[], timestamp(8, 1, 0)))
            .unwrap();

        let store = open_store(&path);
        assert!(store.reports_for("0771111111").is_empty());
        assert_eq!(store.reports_for("0772222222").len(), 1);
    }

    #[test]
    fn test_config_from_env_default() {
        // Only checks the fallback; the variable is not set by the test harness
        if std::env::var_os(lab_reports::config::DATA_FILE_ENV).is_none() {
            let config = LabConfig::from_env();
            assert_eq!(config.data_file, std::path::PathBuf::from("reports_data.json"));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn append_load_round_trip(
            appends in prop::collection::vec((0usize..3, 0usize..34, 0u32..60), 1..12)
        ) {
            let phones = ["0771234567", "0712345678", "0112223334"];
            let catalog = Catalog::global();
            let (_dir, path) = temp_store_path();
            let mut store = open_store(&path);
            let mut expected: Vec<Vec<_>> = vec![Vec::new(); phones.len()];

            for (phone_idx, test_idx, second) in appends {
                let test = catalog.iter().nth(test_idx).unwrap().name;
                let record = record_at("Patient", test, &[], timestamp(12, 0, second));
                store.append(phones[phone_idx], record.clone()).unwrap();
                expected[phone_idx].push(record);
            }

            let reloaded = open_store(&path);
            for (phone, records) in phones.iter().zip(&expected) {
                prop_assert_eq!(reloaded.reports_for(phone), records.as_slice());
            }
            let non_empty = expected.iter().filter(|r| !r.is_empty()).count();
            prop_assert_eq!(reloaded.len(), non_empty);
        }
    }
}
