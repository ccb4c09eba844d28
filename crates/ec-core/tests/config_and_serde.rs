//! Integration tests for operator/precision config and matrix serialization.

use ec_core::{EngineError, Matrix, OpConfig, OpKind, Precision};

// ---------------------------------------------------------------------------
// OpKind / Precision
// ---------------------------------------------------------------------------

#[test]
fn op_kind_default_is_add() {
    assert_eq!(OpKind::default(), OpKind::Add);
}

#[test]
fn op_kind_from_str_is_case_insensitive() {
    assert_eq!("ADD".parse::<OpKind>().unwrap(), OpKind::Add);
    assert_eq!(" max ".parse::<OpKind>().unwrap(), OpKind::Max);
    assert_eq!("*".parse::<OpKind>().unwrap(), OpKind::Mul);
}

#[test]
fn op_kind_from_str_unknown_errors() {
    let result: Result<OpKind, _> = "matmul".parse();
    assert_eq!(
        result.unwrap_err(),
        EngineError::UnknownOperator("matmul".to_string())
    );
}

#[test]
fn op_kind_display_round_trips_through_from_str() {
    for op in OpKind::ALL {
        assert_eq!(op.to_string().parse::<OpKind>().unwrap(), op);
    }
}

#[test]
fn precision_from_str() {
    assert_eq!("f32".parse::<Precision>().unwrap(), Precision::F32);
    assert_eq!("double".parse::<Precision>().unwrap(), Precision::F64);
    assert!("f16".parse::<Precision>().is_err());
    assert_eq!(Precision::F32.size_of(), 4);
    assert_eq!(Precision::F64.size_of(), 8);
}

#[test]
fn op_config_serializes_to_json() {
    let cfg = OpConfig::new(OpKind::Sub, Precision::F32);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"op\":\"sub\""));
    assert!(json.contains("\"precision\":\"f32\""));
    let back: OpConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn op_config_fields_default_when_missing() {
    let cfg: OpConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, OpConfig::default());
    assert_eq!(cfg.precision, Precision::F64);
}

// ---------------------------------------------------------------------------
// Matrix serde
// ---------------------------------------------------------------------------

#[test]
fn matrix_serializes_shape_and_data() {
    let m = Matrix::new(1, 2, vec![0.5f64, -1.0]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"rows":1,"cols":2,"data":[0.5,-1.0]}"#);
    let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn matrix_deserialize_rejects_bad_length() {
    let result: Result<Matrix<f32>, _> =
        serde_json::from_str(r#"{"rows":2,"cols":2,"data":[1.0,2.0,3.0]}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid shape (2, 2)"));
}
