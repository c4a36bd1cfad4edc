//! Lumbar spine rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "L_onset",
        source: MapSource::Single {
            question: "lumbarSpine.onset.type",
            options: &["lifting", "trauma", "gradualOnset"],
        },
    },
    FieldMap {
        flat_id: "L_painSite",
        source: MapSource::Multi {
            question: "lumbarSpine.pain.site",
            options: &["centralLow", "unilateral", "legAboveKnee", "legBelowKnee"],
        },
    },
    FieldMap {
        flat_id: "L_legSymptoms",
        source: MapSource::Multi {
            question: "lumbarSpine.symptoms.leg",
            options: &["numbness", "pinsNeedles", "weakness"],
        },
    },
    FieldMap {
        flat_id: "L_worseSitting",
        source: MapSource::YesNo {
            question: "lumbarSpine.aggravators.sitting",
        },
    },
    FieldMap {
        flat_id: "L_walkingLegSymptoms",
        source: MapSource::YesNo {
            question: "lumbarSpine.aggravators.walkingBringsOnLegSymptoms",
        },
    },
    FieldMap {
        flat_id: "L_easedSitting",
        source: MapSource::YesNo {
            question: "lumbarSpine.easers.sitting",
        },
    },
    FieldMap {
        flat_id: "L_nightImproveMove",
        source: MapSource::YesNo {
            question: "lumbarSpine.symptoms.nightPainImprovesMoving",
        },
    },
    FieldMap {
        flat_id: "L_stiffMorning",
        source: MapSource::Slider {
            question: "lumbarSpine.stiffness.morningMinutes",
        },
    },
    FieldMap {
        flat_id: "L_rf_saddleNumb",
        source: MapSource::YesNo {
            question: "lumbarSpine.redflags.saddleNumbness",
        },
    },
    FieldMap {
        flat_id: "L_rf_bladderBowel",
        source: MapSource::YesNo {
            question: "lumbarSpine.redflags.bladderBowelChange",
        },
    },
    FieldMap {
        flat_id: "L_rf_bilateralLeg",
        source: MapSource::YesNo {
            question: "lumbarSpine.redflags.bilateralLegSymptoms",
        },
    },
    FieldMap {
        flat_id: "L_rf_fever",
        source: MapSource::YesNo {
            question: "lumbarSpine.redflags.fever",
        },
    },
    FieldMap {
        flat_id: "L_rf_weightLoss",
        source: MapSource::YesNo {
            question: "lumbarSpine.redflags.weightLoss",
        },
    },
    FieldMap {
        flat_id: "L_rf_nightConstant",
        source: MapSource::YesNo {
            question: "lumbarSpine.redflags.constantNightPain",
        },
    },
    // Age is not yet collected; the stenosis rule reading it stays dormant
    // until the question set is extended.
    FieldMap {
        flat_id: "L_ageOver60",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "nonspecific_lbp",
        name: "Non-specific low back pain",
        base: 1.2,
        urgent_only: false,
        tests: &[
            "Active lumbar range of motion",
            "Repeated movement testing",
            "Functional movement screen",
        ],
    },
    DifferentialInfo {
        key: "lumbar_radiculopathy",
        name: "Lumbar radiculopathy",
        base: 0.8,
        urgent_only: false,
        tests: &["Straight leg raise", "Myotome and dermatome screen", "Reflex testing"],
    },
    DifferentialInfo {
        key: "stenosis_claudication",
        name: "Lumbar stenosis with neurogenic claudication",
        base: 0.6,
        urgent_only: false,
        tests: &["Walking tolerance assessment", "Two-stage treadmill test"],
    },
    DifferentialInfo {
        key: "facet_mediated",
        name: "Facet-mediated pain",
        base: 0.5,
        urgent_only: false,
        tests: &["Extension-rotation quadrant test", "Segmental palpation"],
    },
    DifferentialInfo {
        key: "inflammatory_axial",
        name: "Inflammatory axial spondyloarthropathy",
        base: 0.5,
        urgent_only: false,
        tests: &["Inflammatory bloods (CRP/ESR, HLA-B27)", "Sacroiliac provocation tests"],
    },
    DifferentialInfo {
        key: "cauda_equina",
        name: "Cauda equina syndrome",
        base: 0.0,
        urgent_only: true,
        tests: &[
            "Emergency surgical referral",
            "Saddle sensation and anal tone assessment",
            "Bladder scan (post-void residual)",
        ],
    },
    DifferentialInfo {
        key: "spinal_infection",
        name: "Spinal infection",
        base: 0.0,
        urgent_only: true,
        tests: &[
            "Urgent bloods (CRP/ESR, white cell count)",
            "Urgent spinal imaging",
        ],
    },
    DifferentialInfo {
        key: "malignancy_concern",
        name: "Possible spinal malignancy",
        base: 0.0,
        urgent_only: true,
        tests: &["Urgent medical referral", "Urgent spinal imaging"],
    },
];

static RED_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::Any(&[
            Pred::Yes("L_rf_saddleNumb"),
            Pred::Yes("L_rf_bladderBowel"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("cauda_equina"),
        },
        reason: "Saddle anaesthesia or bladder/bowel change (possible cauda equina)",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("L_rf_bilateralLeg"),
            Pred::MultiHas("L_legSymptoms", "weakness"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("cauda_equina"),
        },
        reason: "Bilateral leg weakness",
    },
    TriageRule {
        when: Pred::Yes("L_rf_fever"),
        effect: TriageEffect::Red {
            forced: Some("spinal_infection"),
        },
        reason: "Fever with spinal pain (possible infection)",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("L_rf_nightConstant"),
            Pred::Yes("L_rf_weightLoss"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("malignancy_concern"),
        },
        reason: "Night-dominant pain with systemic features",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::MultiHas("L_legSymptoms", "weakness"),
        effect: TriageEffect::Amber,
        reason: "Reported leg weakness",
    },
    TriageRule {
        when: Pred::Yes("L_rf_bilateralLeg"),
        effect: TriageEffect::Amber,
        reason: "Bilateral leg symptoms",
    },
    TriageRule {
        when: Pred::Yes("L_rf_nightConstant"),
        effect: TriageEffect::Amber,
        reason: "Constant night pain",
    },
    TriageRule {
        when: Pred::SliderAtLeast("L_stiffMorning", 45.0),
        effect: TriageEffect::Amber,
        reason: "Prolonged morning stiffness (inflammatory pattern)",
    },
];

static GATES: &[GateRule] = &[GateRule {
    key: "lumbar_radiculopathy",
    contradicted_when: Pred::All(&[
        Pred::MultiAnsweredWithout("L_painSite", "legBelowKnee"),
        Pred::MultiAnsweredWithout("L_painSite", "legAboveKnee"),
    ]),
    why: "No leg-dominant pain reported",
}];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "nonspecific_lbp",
        when: Pred::MultiHas("L_painSite", "centralLow"),
        delta: 1.5,
        why: "Central low back pain",
    },
    ScoreRule {
        key: "nonspecific_lbp",
        when: Pred::SingleIs("L_onset", "lifting"),
        delta: 1.0,
        why: "Lifting-related onset",
    },
    ScoreRule {
        key: "lumbar_radiculopathy",
        when: Pred::MultiHas("L_painSite", "legBelowKnee"),
        delta: 2.0,
        why: "Leg-dominant pain below the knee",
    },
    ScoreRule {
        key: "lumbar_radiculopathy",
        when: Pred::Any(&[
            Pred::MultiHas("L_legSymptoms", "pinsNeedles"),
            Pred::MultiHas("L_legSymptoms", "numbness"),
        ]),
        delta: 1.5,
        why: "Dermatomal pins and needles or numbness",
    },
    ScoreRule {
        key: "lumbar_radiculopathy",
        when: Pred::Yes("L_worseSitting"),
        delta: 0.5,
        why: "Worse with sitting",
    },
    ScoreRule {
        key: "stenosis_claudication",
        when: Pred::All(&[
            Pred::Yes("L_walkingLegSymptoms"),
            Pred::Yes("L_easedSitting"),
        ]),
        delta: 2.0,
        why: "Leg symptoms brought on by walking, eased by sitting",
    },
    ScoreRule {
        key: "stenosis_claudication",
        when: Pred::Yes("L_rf_bilateralLeg"),
        delta: 1.0,
        why: "Bilateral leg symptoms",
    },
    ScoreRule {
        key: "stenosis_claudication",
        when: Pred::SingleIs("L_ageOver60", "yes"),
        delta: 1.5,
        why: "Age over 60",
    },
    ScoreRule {
        key: "facet_mediated",
        when: Pred::MultiHas("L_painSite", "unilateral"),
        delta: 1.5,
        why: "Unilateral paraspinal pain",
    },
    ScoreRule {
        key: "facet_mediated",
        when: Pred::Not(&Pred::Yes("L_worseSitting")),
        delta: 0.5,
        why: "Not aggravated by sitting",
    },
    ScoreRule {
        key: "inflammatory_axial",
        when: Pred::SliderAtLeast("L_stiffMorning", 45.0),
        delta: 2.0,
        why: "Morning stiffness over 45 minutes",
    },
    ScoreRule {
        key: "inflammatory_axial",
        when: Pred::Yes("L_nightImproveMove"),
        delta: 1.5,
        why: "Night pain improving with movement",
    },
    ScoreRule {
        key: "inflammatory_axial",
        when: Pred::SingleIs("L_onset", "gradualOnset"),
        delta: 0.5,
        why: "Insidious onset",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "nonspecific_lbp",
    when: Pred::All(&[
        Pred::MultiHas("L_painSite", "legBelowKnee"),
        Pred::Any(&[
            Pred::MultiHas("L_legSymptoms", "pinsNeedles"),
            Pred::MultiHas("L_legSymptoms", "numbness"),
        ]),
    ]),
    delta: -1.0,
    why: "Leg-dominant pattern argues against simple back pain",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "lumbarSpine",
    label: "Lumbar spine",
    adapter: ADAPTER,
    registry: REGISTRY,
    red_rules: RED_RULES,
    amber_rules: AMBER_RULES,
    gates: GATES,
    rules: RULES,
    suppressions: SUPPRESSIONS,
    default_tests: TriageTests {
        green: &[
            "Active lumbar range of motion",
            "Functional movement screen",
            "Segmental palpation",
        ],
        amber: &[
            "Active lumbar range of motion",
            "Myotome and dermatome screen",
            "Straight leg raise",
            "Reflex testing",
        ],
        red: &["Immediate neurological assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
            "Saddle sensation and bladder function check",
        ],
    },
};
