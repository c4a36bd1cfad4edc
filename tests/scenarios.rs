//! Concrete clinical scenarios pinned against the output contract.

use std::collections::BTreeMap;

use clintake::{
    build_summary, engine, AnswerValue, CanonicalAnswers, Region, Score, TriageLevel,
};

fn doc(entries: &[(&str, AnswerValue)]) -> CanonicalAnswers {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect::<BTreeMap<_, _>>()
}

fn single(token: &str) -> AnswerValue {
    AnswerValue::Single(token.to_string())
}

fn multi(tokens: &[&str]) -> AnswerValue {
    AnswerValue::Multi(tokens.iter().map(|t| t.to_string()).collect())
}

#[test]
fn ankle_inversion_roll_ranks_lateral_sprain_first() {
    let answers = doc(&[
        ("ankle.mechanism.type", single("mechanism.inversionRoll")),
        ("ankle.pain.site", multi(&["site.lateralATFL"])),
    ]);
    let summary = build_summary(Region::Ankle, &answers);

    assert_eq!(summary.triage.level, TriageLevel::Green);
    assert!(summary.triage.reasons.is_empty());

    let top = &summary.detailed_top[0];
    assert_eq!(top.key, "lateral_sprain");
    assert!(top.score > 0.0);
    assert!(top
        .rationale
        .iter()
        .any(|r| r == "Inversion roll mechanism"));
    assert!(top
        .rationale
        .iter()
        .any(|r| r == "Lateral ankle pain (ATFL/CFL region)"));
    assert!(summary.objective_tests.contains(&"Anterior drawer test".to_string()));
}

#[test]
fn ankle_hot_red_fever_forces_the_infection_pathway() {
    let answers = doc(&[("ankle.redflags.hotRedFever", AnswerValue::Bool(true))]);
    let summary = build_summary(Region::Ankle, &answers);

    assert_eq!(summary.triage.level, TriageLevel::Red);
    assert_eq!(summary.detailed_top.len(), 1);
    assert_eq!(summary.detailed_top[0].key, "inflammatory_infection");
    assert_eq!(summary.detailed_top[0].score, 999.0);
    assert_eq!(
        summary.detailed_top[0].rationale,
        vec!["Urgent pathway triggered".to_string()]
    );
    assert!(summary
        .objective_tests
        .contains(&"Urgent same-day medical review".to_string()));
}

#[test]
fn elbow_fever_forces_the_acute_red_pathway() {
    let spec = Region::Elbow.spec();
    let answers = doc(&[("elbow.redflags.fever", AnswerValue::Bool(true))]);

    let adapted = engine::adapt(spec, &answers);
    let triage = engine::classify(spec, &adapted.set);
    assert_eq!(triage.level, TriageLevel::Red);
    assert!(triage
        .reasons
        .iter()
        .any(|r| r == "Fever / hot, red joint"));

    let scored = engine::score(
        spec,
        &adapted.set,
        &triage,
        &clintake::ScoringConfig::default(),
    );
    for s in &scored {
        if s.key == "acute_red_pathway" {
            assert_eq!(s.score, Score::Forced);
        } else {
            assert_eq!(s.score, Score::Excluded, "{} not excluded", s.key);
        }
    }

    let summary = build_summary(Region::Elbow, &answers);
    assert_eq!(summary.detailed_top.len(), 1);
    assert_eq!(summary.detailed_top[0].key, "acute_red_pathway");
    assert_eq!(summary.detailed_top[0].score, 999.0);
}

#[test]
fn knee_locked_now_forces_red_regardless_of_other_answers() {
    let minimal = doc(&[("knee.redflags.lockedNow", AnswerValue::Bool(true))]);
    let busy = doc(&[
        ("knee.redflags.lockedNow", AnswerValue::Bool(true)),
        ("knee.mechanism.type", single("mechanism.gradualOnset")),
        ("knee.pain.site", multi(&["site.anteriorPatella"])),
        ("knee.symptoms.stairsPain", AnswerValue::Bool(true)),
    ]);
    for answers in [minimal, busy] {
        let summary = build_summary(Region::Knee, &answers);
        assert_eq!(summary.triage.level, TriageLevel::Red);
        assert!(summary.triage.reasons.iter().any(
            |r| r == "True locked knee (cannot fully straighten) — urgent assessment"
        ));
        assert_eq!(summary.detailed_top.len(), 1);
        assert_eq!(summary.detailed_top[0].key, "locked_knee");
    }
}

#[test]
fn knee_pivot_with_rapid_effusion_favours_acl() {
    let answers = doc(&[
        ("knee.mechanism.type", single("mechanism.twistPivot")),
        ("knee.injury.pop", AnswerValue::Bool(true)),
        ("knee.swelling.onset", single("swelling.withinHours")),
        ("knee.symptoms.givingWay", AnswerValue::Bool(true)),
    ]);
    let summary = build_summary(Region::Knee, &answers);
    // Pop plus rapid effusion is an amber-level haemarthrosis concern.
    assert_eq!(summary.triage.level, TriageLevel::Amber);
    assert_eq!(summary.detailed_top[0].key, "acl_rupture");
    assert!(summary
        .detailed_top[0]
        .rationale
        .iter()
        .any(|r| r == "Rapid effusion within hours"));
}

#[test]
fn lumbar_saddle_numbness_forces_cauda_equina() {
    let answers = doc(&[(
        "lumbarSpine.redflags.saddleNumbness",
        AnswerValue::Bool(true),
    )]);
    let summary = build_summary(Region::LumbarSpine, &answers);
    assert_eq!(summary.triage.level, TriageLevel::Red);
    assert_eq!(summary.detailed_top.len(), 1);
    assert_eq!(summary.detailed_top[0].key, "cauda_equina");
    assert!(summary
        .objective_tests
        .contains(&"Emergency surgical referral".to_string()));
}

#[test]
fn lumbar_leg_dominant_pattern_ranks_radiculopathy_over_back_pain() {
    let answers = doc(&[
        (
            "lumbarSpine.pain.site",
            multi(&["site.legBelowKnee", "site.unilateral"]),
        ),
        ("lumbarSpine.symptoms.leg", multi(&["leg.pinsNeedles"])),
        ("lumbarSpine.aggravators.sitting", AnswerValue::Bool(true)),
    ]);
    let summary = build_summary(Region::LumbarSpine, &answers);
    assert_eq!(summary.detailed_top[0].key, "lumbar_radiculopathy");
    // The suppression keeps non-specific back pain below the leg-dominant
    // differential.
    let nslbp = summary
        .detailed_top
        .iter()
        .position(|d| d.key == "nonspecific_lbp");
    if let Some(pos) = nslbp {
        assert!(pos > 0);
    }
}

#[test]
fn wrist_snuffbox_after_a_fall_is_amber_and_scaphoid_led() {
    let answers = doc(&[
        ("wrist.mechanism.type", single("mechanism.fallOutstretched")),
        ("wrist.pain.site", multi(&["site.snuffbox"])),
    ]);
    let summary = build_summary(Region::Wrist, &answers);
    assert_eq!(summary.triage.level, TriageLevel::Amber);
    assert!(summary
        .triage
        .reasons
        .iter()
        .any(|r| r == "Anatomical snuffbox tenderness after a fall"));
    assert_eq!(summary.detailed_top[0].key, "scaphoid_injury");
}

#[test]
fn cervical_gait_disturbance_forces_myelopathy() {
    let answers = doc(&[(
        "cervicalSpine.redflags.gaitBalance",
        AnswerValue::Bool(true),
    )]);
    let summary = build_summary(Region::CervicalSpine, &answers);
    assert_eq!(summary.triage.level, TriageLevel::Red);
    assert_eq!(summary.detailed_top[0].key, "myelopathy");
}

#[test]
fn thoracic_breathing_pain_ranks_rib_dysfunction() {
    let answers = doc(&[
        ("thoracicSpine.pain.site", multi(&["site.ribChestWall"])),
        (
            "thoracicSpine.symptoms.painOnDeepBreath",
            AnswerValue::Bool(true),
        ),
    ]);
    let summary = build_summary(Region::ThoracicSpine, &answers);
    assert_eq!(summary.triage.level, TriageLevel::Green);
    assert_eq!(summary.detailed_top[0].key, "costovertebral_rib");
}

#[test]
fn hip_fall_without_weight_bearing_forces_fracture_pathway() {
    let answers = doc(&[
        ("hip.onset.type", single("onset.fall")),
        ("hip.function.weightBearing", single("weightBearing.unable")),
    ]);
    let summary = build_summary(Region::Hip, &answers);
    assert_eq!(summary.triage.level, TriageLevel::Red);
    assert_eq!(summary.detailed_top[0].key, "nof_fracture");
    assert_eq!(summary.detailed_top[0].score, 999.0);
}

#[test]
fn shoulder_overhead_pattern_ranks_cuff_related_pain() {
    let answers = doc(&[
        ("shoulder.mechanism.type", single("mechanism.overheadLoad")),
        ("shoulder.pain.site", multi(&["site.deltoidLateral"])),
        ("shoulder.symptoms.overheadPain", AnswerValue::Bool(true)),
    ]);
    let summary = build_summary(Region::Shoulder, &answers);
    assert_eq!(summary.triage.level, TriageLevel::Green);
    assert_eq!(summary.detailed_top[0].key, "rotator_cuff_related");
    assert!(summary
        .detailed_top[0]
        .rationale
        .iter()
        .any(|r| r == "Painful arc with overhead use"));
}
