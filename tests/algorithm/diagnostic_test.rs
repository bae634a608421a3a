#[cfg(test)]
mod tests {
    use crate::utils::values;
    use lab_reports::{Classification, EvaluationError, classify, evaluate};
    use proptest::prelude::*;

    fn rank(test: &str, first: (&str, f64), second: (&str, f64)) -> u8 {
        let (a, b) = (first.1.to_string(), second.1.to_string());
        let v = values(&[(first.0, a.as_str()), (second.0, b.as_str())]);
        evaluate(test, &v)
            .expect("numeric input evaluates")
            .severity_rank()
            .expect("tiered tests produce a tier")
    }

    #[test]
    fn test_composite_score_examples() {
        let positive = values(&[("RMD", "100000"), ("MDD", "25000"), ("SSI", "25000")]);
        assert_eq!(evaluate("HIV Test", &positive), Ok(Classification::Positive));

        let negative = values(&[("RMD", "25000"), ("MDD", "15000"), ("SSI", "10000")]);
        assert_eq!(evaluate("HIV Test", &negative), Ok(Classification::Negative));
    }

    #[test]
    fn test_blood_pressure_systolic_alone_is_positive() {
        let v = values(&[("Systolic", "145"), ("Diastolic", "70")]);
        assert_eq!(evaluate("Blood Pressure Test", &v), Ok(Classification::Positive));
    }

    #[test]
    fn test_diabetes_glucose_alone_is_midrange() {
        let v = values(&[("Fasting Glucose", "110"), ("HbA1c", "5.0")]);
        assert_eq!(evaluate("Diabetes Test", &v), Ok(Classification::Midrange));
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let blank = values(&[("Fasting Glucose", ""), ("HbA1c", "5.0")]);
        let garbage = values(&[("Fasting Glucose", "1O0"), ("HbA1c", "5.0")]);

        assert!(matches!(
            evaluate("Diabetes Test", &blank),
            Err(EvaluationError::MissingField { .. })
        ));
        assert!(matches!(
            evaluate("Diabetes Test", &garbage),
            Err(EvaluationError::UnparsableNumber { .. })
        ));
        assert_eq!(classify("Diabetes Test", &blank), Classification::Error);
        assert_eq!(classify("Diabetes Test", &garbage), Classification::Error);
    }

    #[test]
    fn test_test_name_is_trimmed() {
        let v = values(&[("Fasting Glucose", "130"), ("HbA1c", "5.0")]);
        assert_eq!(evaluate(" Diabetes Test ", &v), Ok(Classification::Positive));
        assert_eq!(classify("Diabetes Test\n", &v), Classification::Positive);
        assert_eq!(
            evaluate("Diabetes", &v),
            Err(EvaluationError::UnknownTest("Diabetes".to_string()))
        );
    }

    #[test]
    fn test_placeholder_ignores_values() {
        let v = values(&[("NS1", "not a number")]);
        assert_eq!(evaluate("Dengue Test", &v), Ok(Classification::Positive));
    }

    proptest! {
        #[test]
        fn blood_pressure_is_monotonic(
            sys in 0.0f64..250.0,
            dia in 0.0f64..160.0,
            d_sys in 0.0f64..100.0,
            d_dia in 0.0f64..100.0,
        ) {
            let before = rank("Blood Pressure Test", ("Systolic", sys), ("Diastolic", dia));
            let after = rank("Blood Pressure Test", ("Systolic", sys + d_sys), ("Diastolic", dia + d_dia));
            prop_assert!(after >= before);
        }

        #[test]
        fn diabetes_is_monotonic(
            glucose in 0.0f64..300.0,
            hba1c in 0.0f64..15.0,
            d_glucose in 0.0f64..100.0,
            d_hba1c in 0.0f64..5.0,
        ) {
            let before = rank("Diabetes Test", ("Fasting Glucose", glucose), ("HbA1c", hba1c));
            let after = rank("Diabetes Test", ("Fasting Glucose", glucose + d_glucose), ("HbA1c", hba1c + d_hba1c));
            prop_assert!(after >= before);
        }
    }
}
