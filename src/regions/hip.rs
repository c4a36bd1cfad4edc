//! Hip rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "H_onset",
        source: MapSource::Single {
            question: "hip.onset.type",
            options: &["fall", "twist", "overuseRun", "gradualOnset"],
        },
    },
    FieldMap {
        flat_id: "H_painSite",
        source: MapSource::Multi {
            question: "hip.pain.site",
            options: &["groin", "lateralTrochanter", "buttock", "anteriorThigh"],
        },
    },
    FieldMap {
        flat_id: "H_weightBear",
        source: MapSource::Single {
            question: "hip.function.weightBearing",
            options: &["unable", "limping", "normal"],
        },
    },
    FieldMap {
        flat_id: "H_nightPain",
        source: MapSource::YesNo {
            question: "hip.pain.night",
        },
    },
    FieldMap {
        flat_id: "H_sideLyingPain",
        source: MapSource::YesNo {
            question: "hip.pain.lyingOnSide",
        },
    },
    FieldMap {
        flat_id: "H_stiffMorning",
        source: MapSource::Slider {
            question: "hip.stiffness.morningMinutes",
        },
    },
    FieldMap {
        flat_id: "H_rf_fever",
        source: MapSource::YesNo {
            question: "hip.redflags.fever",
        },
    },
    FieldMap {
        flat_id: "H_rf_weightLoss",
        source: MapSource::YesNo {
            question: "hip.redflags.weightLoss",
        },
    },
    // Bone-health history (steroids, osteoporosis) is not yet collected;
    // the stress-fracture rule reading it stays dormant until it is.
    FieldMap {
        flat_id: "H_boneRisk",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "hip_oa",
        name: "Hip osteoarthritis",
        base: 1.0,
        urgent_only: false,
        tests: &["FABER test", "Hip internal rotation range", "Weight-bearing radiograph"],
    },
    DifferentialInfo {
        key: "gtps",
        name: "Greater trochanteric pain syndrome",
        base: 1.0,
        urgent_only: false,
        tests: &["Palpation of the greater trochanter", "Resisted hip abduction", "30-second single-leg stance"],
    },
    DifferentialInfo {
        key: "fai_labral",
        name: "Femoroacetabular impingement / labral pathology",
        base: 0.7,
        urgent_only: false,
        tests: &["FADIR test", "Hip quadrant test"],
    },
    DifferentialInfo {
        key: "referred_lumbar",
        name: "Referred pain from the lumbar spine",
        base: 0.6,
        urgent_only: false,
        tests: &["Lumbar spine screen", "Straight leg raise"],
    },
    DifferentialInfo {
        key: "stress_fracture",
        name: "Femoral stress fracture",
        base: 0.4,
        urgent_only: false,
        tests: &["Hop test (if tolerated)", "MRI if suspicion persists"],
    },
    DifferentialInfo {
        key: "nof_fracture",
        name: "Neck of femur fracture",
        base: 0.0,
        urgent_only: true,
        tests: &["Urgent orthopaedic review", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "inflammatory_infection",
        name: "Inflammatory or septic arthritis",
        base: 0.0,
        urgent_only: true,
        tests: &[
            "Urgent bloods (CRP/ESR, white cell count)",
            "Joint aspiration",
        ],
    },
];

static RED_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::Yes("H_rf_fever"),
        effect: TriageEffect::Red {
            forced: Some("inflammatory_infection"),
        },
        reason: "Fever with an irritable hip",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::SingleIs("H_onset", "fall"),
            Pred::SingleIs("H_weightBear", "unable"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("nof_fracture"),
        },
        reason: "Fall with inability to weight-bear",
    },
    TriageRule {
        when: Pred::All(&[Pred::Yes("H_rf_weightLoss"), Pred::Yes("H_nightPain")]),
        effect: TriageEffect::Red { forced: None },
        reason: "Night pain with unexplained weight loss",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::SingleIs("H_weightBear", "unable"),
        effect: TriageEffect::Amber,
        reason: "Unable to weight-bear",
    },
    TriageRule {
        when: Pred::SliderAtLeast("H_stiffMorning", 30.0),
        effect: TriageEffect::Amber,
        reason: "Prolonged morning stiffness",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::SingleIs("H_onset", "overuseRun"),
            Pred::MultiHas("H_painSite", "groin"),
        ]),
        effect: TriageEffect::Amber,
        reason: "Load-related groin pain in a runner (stress injury risk)",
    },
];

static GATES: &[GateRule] = &[
    GateRule {
        key: "gtps",
        contradicted_when: Pred::MultiAnsweredWithout("H_painSite", "lateralTrochanter"),
        why: "Pain location does not fit a lateral pattern",
    },
    GateRule {
        key: "hip_oa",
        contradicted_when: Pred::All(&[
            Pred::MultiAnsweredWithout("H_painSite", "groin"),
            Pred::MultiAnsweredWithout("H_painSite", "anteriorThigh"),
        ]),
        why: "No groin or anterior thigh pain reported",
    },
];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "hip_oa",
        when: Pred::MultiHas("H_painSite", "groin"),
        delta: 2.0,
        why: "Groin-dominant pain",
    },
    ScoreRule {
        key: "hip_oa",
        when: Pred::SliderAtLeast("H_stiffMorning", 30.0),
        delta: 1.5,
        why: "Morning stiffness over 30 minutes",
    },
    ScoreRule {
        key: "hip_oa",
        when: Pred::SingleIs("H_onset", "gradualOnset"),
        delta: 1.0,
        why: "Gradual onset of symptoms",
    },
    ScoreRule {
        key: "gtps",
        when: Pred::MultiHas("H_painSite", "lateralTrochanter"),
        delta: 2.0,
        why: "Lateral hip pain over the greater trochanter",
    },
    ScoreRule {
        key: "gtps",
        when: Pred::Yes("H_sideLyingPain"),
        delta: 1.5,
        why: "Pain lying on the affected side",
    },
    ScoreRule {
        key: "fai_labral",
        when: Pred::SingleIs("H_onset", "twist"),
        delta: 1.5,
        why: "Twisting onset",
    },
    ScoreRule {
        key: "fai_labral",
        when: Pred::MultiHas("H_painSite", "groin"),
        delta: 1.0,
        why: "Groin pain with movement",
    },
    ScoreRule {
        key: "referred_lumbar",
        when: Pred::MultiHas("H_painSite", "buttock"),
        delta: 1.5,
        why: "Buttock-dominant pain suggests lumbar referral",
    },
    ScoreRule {
        key: "stress_fracture",
        when: Pred::SingleIs("H_onset", "overuseRun"),
        delta: 2.0,
        why: "Running load history",
    },
    ScoreRule {
        key: "stress_fracture",
        when: Pred::MultiHas("H_painSite", "groin"),
        delta: 1.0,
        why: "Deep groin pain with load",
    },
    ScoreRule {
        key: "stress_fracture",
        when: Pred::Yes("H_boneRisk"),
        delta: 1.5,
        why: "Bone-health risk factors",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "hip_oa",
    when: Pred::All(&[
        Pred::MultiHas("H_painSite", "buttock"),
        Pred::MultiAnsweredWithout("H_painSite", "groin"),
    ]),
    delta: -1.0,
    why: "Buttock-only pattern argues against joint-line arthritis",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "hip",
    label: "Hip",
    adapter: ADAPTER,
    registry: REGISTRY,
    red_rules: RED_RULES,
    amber_rules: AMBER_RULES,
    gates: GATES,
    rules: RULES,
    suppressions: SUPPRESSIONS,
    default_tests: TriageTests {
        green: &[
            "Observation and gait screen",
            "Active and passive range of motion",
            "Resisted isometric testing",
        ],
        amber: &[
            "Observation and gait screen",
            "Weight-bearing tolerance check",
            "Lumbar spine screen",
        ],
        red: &["Immediate mobility and neurovascular assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
        ],
    },
};
