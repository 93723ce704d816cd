use super::*;
use timeline::Mutation;

#[test]
fn current_step_follows_phase_then_stage() {
    let mut g = GenerationState::default();
    g.begin();
    assert_eq!(current_step(&g), Step::Design);
    g.apply(&Mutation::SetPhase { phase: Phase::Files }).unwrap();
    assert_eq!(current_step(&g), Step::Files);
    g.apply(&Mutation::Complete).unwrap();
    assert_eq!(current_step(&g), Step::Complete);
}

#[test]
fn fresh_state_shows_design_block() {
    assert_eq!(current_step(&GenerationState::default()), Step::Design);
}
