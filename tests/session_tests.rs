// tests/session_tests.rs

use num_complex::Complex64;
use qstep::circuits::presets;
use qstep::{CircuitBuilder, EngineConfig, EngineError, GateStep, Session, SessionPhase, SimulationEngine, StateVector};

fn seeded_session(n: usize, seed: u64) -> Result<Session, EngineError> {
    let engine = SimulationEngine::new(EngineConfig::default().with_seed(seed))?;
    Session::new(engine, n)
}

fn probs_close(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len() && actual.iter().zip(expected).all(|(a, e)| (a - e).abs() < 1e-9)
}

#[test]
fn test_step_through_bell_and_back() -> Result<(), EngineError> {
    let mut session = seeded_session(2, 7)?;
    assert_eq!(session.phase(), SessionPhase::Initialized);

    for step in presets::bell_pair().steps() {
        session.apply_step(step)?;
    }
    assert!(probs_close(&session.probabilities(), &[0.5, 0.0, 0.0, 0.5]));
    assert_eq!(session.history_len(), 2);

    // Step backwards through the history one gate at a time.
    let after_h = session.undo().map(StateVector::probabilities);
    assert!(after_h.is_some_and(|p| probs_close(&p, &[0.5, 0.0, 0.5, 0.0])));
    session.undo();
    assert_eq!(session.state(), &StateVector::zero(2)?);
    assert_eq!(session.phase(), SessionPhase::Initialized);
    assert!(session.undo().is_none());
    Ok(())
}

#[test]
fn test_run_is_all_or_nothing() -> Result<(), EngineError> {
    let mut session = seeded_session(2, 1)?;
    session.apply("X", 1)?;
    let before = session.state().clone();

    let broken = CircuitBuilder::new().gate("H", 0).gate("CNOT", 0).gate("H", 4).build();
    assert_eq!(session.run(&broken).unwrap_err(), EngineError::InvalidTarget { target: 4, num_qubits: 2 });
    assert_eq!(session.state(), &before);
    assert_eq!(session.history_len(), 1);

    let results = session.run(&presets::grover_11())?;
    assert_eq!(results.len(), presets::grover_11().len());
    assert_eq!(session.history_len(), 1 + results.len());
    Ok(())
}

#[test]
fn test_grover_session_measures_eleven() -> Result<(), EngineError> {
    let mut session = seeded_session(2, 99)?;
    session.run(&presets::grover_11())?;
    let outcome = session.measure(512)?;
    assert_eq!(outcome.count("11"), 512);
    assert_eq!(outcome.frequency("11"), 1.0);
    assert_eq!(session.phase(), SessionPhase::Ready);
    Ok(())
}

#[test]
fn test_resume_from_client_state() -> Result<(), EngineError> {
    let engine = SimulationEngine::default();
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let plus = engine.state_from_amplitudes(vec![Complex64::new(h, 0.0), Complex64::new(h, 0.0)])?;

    let mut session = Session::new(engine, 2)?;
    session.apply("H", 0)?;
    session.resume(plus)?;
    assert_eq!(session.num_qubits(), 1);
    assert_eq!(session.history_len(), 0);
    assert_eq!(session.phase(), SessionPhase::Ready);

    let back = session.apply("H", 0)?;
    assert!(probs_close(&back.probabilities, &[1.0, 0.0]));
    Ok(())
}

#[test]
fn test_resume_respects_configured_limit() -> Result<(), EngineError> {
    let engine = SimulationEngine::new(EngineConfig { max_qubits: 1, ..EngineConfig::default() })?;
    let mut session = Session::new(engine, 1)?;
    let two = StateVector::zero(2)?;
    assert_eq!(session.resume(two).unwrap_err(), EngineError::InvalidRegisterSize { num_qubits: 2, max: 1 });
    assert_eq!(session.num_qubits(), 1);
    Ok(())
}

#[test]
fn test_cnot_requires_two_qubits_in_session() -> Result<(), EngineError> {
    let mut session = seeded_session(3, 5)?;
    let step = GateStep::new("CNOT", 0);
    assert_eq!(
        session.apply_step(&step).unwrap_err(),
        EngineError::RegisterSizeMismatch { gate: "CNOT".to_string(), required: 2, actual: 3 }
    );
    session.resize(2)?;
    session.apply_step(&step)?;
    // CNOT on |00> is a no-op on the amplitudes, but still a step.
    assert_eq!(session.state(), &StateVector::zero(2)?);
    assert_eq!(session.phase(), SessionPhase::Ready);
    Ok(())
}

#[test]
fn test_bloch_follows_session_state() -> Result<(), EngineError> {
    let mut session = seeded_session(1, 3)?;
    assert!((session.bloch(0)?.z - 1.0).abs() < 1e-9);
    session.apply("H", 0)?;
    let plus = session.bloch(0)?;
    assert!((plus.x - 1.0).abs() < 1e-9);
    assert!(plus.z.abs() < 1e-9);
    session.apply("S", 0)?;
    assert!((session.bloch(0)?.y - 1.0).abs() < 1e-9);
    assert!(matches!(session.bloch(1), Err(EngineError::InvalidTarget { .. })));
    Ok(())
}
