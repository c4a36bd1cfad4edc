//! Knee rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "K_mech",
        source: MapSource::Single {
            question: "knee.mechanism.type",
            options: &[
                "twistPivot",
                "directBlow",
                "hyperextension",
                "squatRise",
                "gradualOnset",
            ],
        },
    },
    FieldMap {
        flat_id: "K_painSite",
        source: MapSource::Multi {
            question: "knee.pain.site",
            options: &[
                "medialJointLine",
                "lateralJointLine",
                "anteriorPatella",
                "posteriorFossa",
                "wholeKnee",
            ],
        },
    },
    FieldMap {
        flat_id: "K_swelling",
        source: MapSource::Single {
            question: "knee.swelling.onset",
            options: &["withinHours", "nextDay", "none"],
        },
    },
    FieldMap {
        flat_id: "K_pop",
        source: MapSource::YesNo {
            question: "knee.injury.pop",
        },
    },
    FieldMap {
        flat_id: "K_catchLock",
        source: MapSource::YesNo {
            question: "knee.symptoms.catching",
        },
    },
    FieldMap {
        flat_id: "K_givesWay",
        source: MapSource::YesNo {
            question: "knee.symptoms.givingWay",
        },
    },
    FieldMap {
        flat_id: "K_stairsPain",
        source: MapSource::YesNo {
            question: "knee.symptoms.stairsPain",
        },
    },
    FieldMap {
        flat_id: "K_weightBear",
        source: MapSource::Single {
            question: "knee.function.weightBearing",
            options: &["unableFourSteps", "limping", "normal"],
        },
    },
    FieldMap {
        flat_id: "K_stiffMorning",
        source: MapSource::Slider {
            question: "knee.stiffness.morningMinutes",
        },
    },
    FieldMap {
        flat_id: "K_rf_lockedNow",
        source: MapSource::YesNo {
            question: "knee.redflags.lockedNow",
        },
    },
    FieldMap {
        flat_id: "K_rf_hotRedFever",
        source: MapSource::YesNo {
            question: "knee.redflags.hotRedFever",
        },
    },
    FieldMap {
        flat_id: "K_rf_calfSwelling",
        source: MapSource::YesNo {
            question: "knee.redflags.calfSwelling",
        },
    },
    FieldMap {
        flat_id: "K_rf_highEnergy",
        source: MapSource::YesNo {
            question: "knee.redflags.highEnergy",
        },
    },
    // Age band is not yet collected by the questionnaire; the degenerative
    // rule reading it stays dormant until the question set is extended.
    FieldMap {
        flat_id: "K_ageOver50",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "acl_rupture",
        name: "ACL rupture",
        base: 0.8,
        urgent_only: false,
        tests: &["Lachman test", "Pivot shift test", "Effusion sweep test"],
    },
    DifferentialInfo {
        key: "meniscal_tear",
        name: "Meniscal tear",
        base: 1.0,
        urgent_only: false,
        tests: &["Joint line palpation", "McMurray test", "Thessaly test"],
    },
    DifferentialInfo {
        key: "mcl_sprain",
        name: "MCL sprain",
        base: 0.8,
        urgent_only: false,
        tests: &["Valgus stress test at 0 and 30 degrees"],
    },
    DifferentialInfo {
        key: "patellofemoral",
        name: "Patellofemoral pain",
        base: 1.0,
        urgent_only: false,
        tests: &["Patellar glide and tilt assessment", "Single-leg squat observation"],
    },
    DifferentialInfo {
        key: "oa_degenerative",
        name: "Degenerative joint change",
        base: 0.6,
        urgent_only: false,
        tests: &["Active and passive range of motion", "Weight-bearing radiograph"],
    },
    DifferentialInfo {
        key: "fracture",
        name: "Knee fracture",
        base: 0.3,
        urgent_only: false,
        tests: &["Ottawa knee rules", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "locked_knee",
        name: "Locked knee (displaced meniscal fragment)",
        base: 0.0,
        urgent_only: true,
        tests: &["Urgent orthopaedic review", "MRI"],
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
        when: Pred::Yes("K_rf_lockedNow"),
        effect: TriageEffect::Red {
            forced: Some("locked_knee"),
        },
        reason: "True locked knee (cannot fully straighten) — urgent assessment",
    },
    TriageRule {
        when: Pred::Yes("K_rf_hotRedFever"),
        effect: TriageEffect::Red {
            forced: Some("inflammatory_infection"),
        },
        reason: "Hot, red joint with fever",
    },
    TriageRule {
        when: Pred::Yes("K_rf_calfSwelling"),
        effect: TriageEffect::Red { forced: None },
        reason: "Unilateral calf swelling or tenderness",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::Yes("K_rf_highEnergy"),
        effect: TriageEffect::Amber,
        reason: "High-energy mechanism of injury",
    },
    TriageRule {
        when: Pred::SingleIs("K_weightBear", "unableFourSteps"),
        effect: TriageEffect::Amber,
        reason: "Unable to weight-bear four steps",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::SingleIs("K_swelling", "withinHours"),
            Pred::Yes("K_pop"),
        ]),
        effect: TriageEffect::Amber,
        reason: "Rapid effusion with a pop (possible haemarthrosis)",
    },
    TriageRule {
        when: Pred::SliderAtLeast("K_stiffMorning", 30.0),
        effect: TriageEffect::Amber,
        reason: "Prolonged morning stiffness",
    },
];

static GATES: &[GateRule] = &[
    GateRule {
        key: "meniscal_tear",
        contradicted_when: Pred::All(&[
            Pred::MultiAnsweredWithout("K_painSite", "medialJointLine"),
            Pred::MultiAnsweredWithout("K_painSite", "lateralJointLine"),
        ]),
        why: "No joint line pain reported",
    },
    GateRule {
        key: "patellofemoral",
        contradicted_when: Pred::MultiAnsweredWithout("K_painSite", "anteriorPatella"),
        why: "Pain location does not fit an anterior pattern",
    },
    GateRule {
        key: "mcl_sprain",
        contradicted_when: Pred::MultiAnsweredWithout("K_painSite", "medialJointLine"),
        why: "Pain location does not fit a medial pattern",
    },
];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "acl_rupture",
        when: Pred::SingleIs("K_mech", "twistPivot"),
        delta: 2.0,
        why: "Twisting or pivoting injury",
    },
    ScoreRule {
        key: "acl_rupture",
        when: Pred::Yes("K_pop"),
        delta: 1.5,
        why: "Audible pop at injury",
    },
    ScoreRule {
        key: "acl_rupture",
        when: Pred::SingleIs("K_swelling", "withinHours"),
        delta: 1.5,
        why: "Rapid effusion within hours",
    },
    ScoreRule {
        key: "acl_rupture",
        when: Pred::Yes("K_givesWay"),
        delta: 1.0,
        why: "Episodes of giving way",
    },
    ScoreRule {
        key: "meniscal_tear",
        when: Pred::Yes("K_catchLock"),
        delta: 2.0,
        why: "Catching or intermittent locking",
    },
    ScoreRule {
        key: "meniscal_tear",
        when: Pred::MultiHas("K_painSite", "medialJointLine"),
        delta: 1.5,
        why: "Medial joint line pain",
    },
    ScoreRule {
        key: "meniscal_tear",
        when: Pred::MultiHas("K_painSite", "lateralJointLine"),
        delta: 1.5,
        why: "Lateral joint line pain",
    },
    ScoreRule {
        key: "meniscal_tear",
        when: Pred::SingleIs("K_swelling", "nextDay"),
        delta: 1.0,
        why: "Delayed effusion overnight",
    },
    ScoreRule {
        key: "meniscal_tear",
        when: Pred::SingleIs("K_mech", "twistPivot"),
        delta: 1.0,
        why: "Twisting mechanism",
    },
    ScoreRule {
        key: "meniscal_tear",
        when: Pred::SingleIs("K_mech", "squatRise"),
        delta: 1.0,
        why: "Pain rising from a deep squat",
    },
    ScoreRule {
        key: "mcl_sprain",
        when: Pred::SingleIs("K_mech", "directBlow"),
        delta: 1.5,
        why: "Direct blow to the knee",
    },
    ScoreRule {
        key: "mcl_sprain",
        when: Pred::MultiHas("K_painSite", "medialJointLine"),
        delta: 1.0,
        why: "Medial-sided pain",
    },
    ScoreRule {
        key: "patellofemoral",
        when: Pred::MultiHas("K_painSite", "anteriorPatella"),
        delta: 2.0,
        why: "Anterior or peripatellar pain",
    },
    ScoreRule {
        key: "patellofemoral",
        when: Pred::Yes("K_stairsPain"),
        delta: 1.5,
        why: "Pain on stairs",
    },
    ScoreRule {
        key: "patellofemoral",
        when: Pred::SingleIs("K_mech", "gradualOnset"),
        delta: 1.0,
        why: "Gradual onset without injury",
    },
    ScoreRule {
        key: "oa_degenerative",
        when: Pred::SingleIs("K_mech", "gradualOnset"),
        delta: 1.5,
        why: "Gradual onset of symptoms",
    },
    ScoreRule {
        key: "oa_degenerative",
        when: Pred::SliderAtLeast("K_stiffMorning", 30.0),
        delta: 1.0,
        why: "Morning stiffness over 30 minutes",
    },
    ScoreRule {
        key: "oa_degenerative",
        when: Pred::SingleIs("K_ageOver50", "yes"),
        delta: 1.5,
        why: "Age over 50",
    },
    ScoreRule {
        key: "fracture",
        when: Pred::Yes("K_rf_highEnergy"),
        delta: 2.0,
        why: "High-energy mechanism",
    },
    ScoreRule {
        key: "fracture",
        when: Pred::SingleIs("K_weightBear", "unableFourSteps"),
        delta: 1.5,
        why: "Unable to weight-bear four steps (Ottawa criterion)",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "patellofemoral",
    when: Pred::All(&[
        Pred::SingleIs("K_mech", "twistPivot"),
        Pred::Yes("K_pop"),
    ]),
    delta: -1.0,
    why: "Traumatic pivot pattern argues against simple anterior knee pain",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "knee",
    label: "Knee",
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
            "Effusion sweep test",
        ],
        amber: &[
            "Observation and gait screen",
            "Ottawa knee rules",
            "Neurovascular screen",
        ],
        red: &["Immediate neurovascular assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
        ],
    },
};
