//! Ankle rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "A_mech",
        source: MapSource::Single {
            question: "ankle.mechanism.type",
            options: &[
                "inversionRoll",
                "eversionTwist",
                "directBlow",
                "landingJump",
                "gradualOnset",
            ],
        },
    },
    FieldMap {
        flat_id: "A_painSite",
        source: MapSource::Multi {
            question: "ankle.pain.site",
            options: &[
                "lateralATFL",
                "medialDeltoid",
                "anteriorJoint",
                "posteriorAchilles",
                "baseFifthMet",
                "midfootNavicular",
            ],
        },
    },
    FieldMap {
        flat_id: "A_weightBear",
        source: MapSource::Single {
            question: "ankle.function.weightBearing",
            options: &["unableFourSteps", "limping", "normal"],
        },
    },
    FieldMap {
        flat_id: "A_swelling",
        source: MapSource::Single {
            question: "ankle.swelling.onset",
            options: &["immediateHigh", "gradual", "none"],
        },
    },
    FieldMap {
        flat_id: "A_pop",
        source: MapSource::YesNo {
            question: "ankle.injury.pop",
        },
    },
    FieldMap {
        flat_id: "A_instability",
        source: MapSource::YesNo {
            question: "ankle.function.givingWay",
        },
    },
    FieldMap {
        flat_id: "A_support",
        source: MapSource::Recode {
            question: "ankle.gait.support",
            map: &[
                ("unaided", "unaided"),
                ("stick", "support"),
                ("oneCrutch", "support"),
                ("twoCrutches", "support"),
            ],
        },
    },
    FieldMap {
        flat_id: "A_nightPain",
        source: MapSource::YesNo {
            question: "ankle.pain.night",
        },
    },
    FieldMap {
        flat_id: "A_stiffMorning",
        source: MapSource::Slider {
            question: "ankle.stiffness.morningMinutes",
        },
    },
    FieldMap {
        flat_id: "A_rf_hotRedFever",
        source: MapSource::YesNo {
            question: "ankle.redflags.hotRedFever",
        },
    },
    FieldMap {
        flat_id: "A_rf_deformity",
        source: MapSource::YesNo {
            question: "ankle.redflags.deformity",
        },
    },
    FieldMap {
        flat_id: "A_rf_numbFoot",
        source: MapSource::YesNo {
            question: "ankle.redflags.numbFoot",
        },
    },
    FieldMap {
        flat_id: "A_rf_calfSwelling",
        source: MapSource::YesNo {
            question: "ankle.redflags.calfSwelling",
        },
    },
    // Sprain-recurrence history is not yet collected by the questionnaire;
    // the chronic-instability rule reading it stays dormant until it is.
    FieldMap {
        flat_id: "A_priorSprain",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "lateral_sprain",
        name: "Lateral ligament sprain (ATFL/CFL)",
        base: 1.0,
        urgent_only: false,
        tests: &["Anterior drawer test", "Talar tilt test", "Ottawa ankle rules"],
    },
    DifferentialInfo {
        key: "medial_sprain",
        name: "Deltoid ligament sprain",
        base: 0.5,
        urgent_only: false,
        tests: &["Eversion stress test", "Ottawa ankle rules"],
    },
    DifferentialInfo {
        key: "syndesmosis",
        name: "High ankle sprain (syndesmosis)",
        base: 0.6,
        urgent_only: false,
        tests: &["Squeeze test", "External rotation stress test"],
    },
    DifferentialInfo {
        key: "fracture",
        name: "Ankle or midfoot fracture",
        base: 0.4,
        urgent_only: false,
        tests: &["Ottawa ankle rules", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "achilles",
        name: "Achilles tendinopathy or rupture",
        base: 0.6,
        urgent_only: false,
        tests: &["Thompson (calf squeeze) test", "Palpation of the Achilles tendon"],
    },
    DifferentialInfo {
        key: "instability_chronic",
        name: "Chronic ankle instability",
        base: 0.5,
        urgent_only: false,
        tests: &["Anterior drawer test", "Single-leg balance test"],
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
        when: Pred::Yes("A_rf_hotRedFever"),
        effect: TriageEffect::Red {
            forced: Some("inflammatory_infection"),
        },
        reason: "Hot, red joint with fever",
    },
    TriageRule {
        when: Pred::Yes("A_rf_deformity"),
        effect: TriageEffect::Red {
            forced: Some("fracture"),
        },
        reason: "Obvious deformity after injury",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("A_rf_numbFoot"),
            Pred::Any(&[
                Pred::SingleIs("A_mech", "landingJump"),
                Pred::SingleIs("A_mech", "directBlow"),
            ]),
        ]),
        effect: TriageEffect::Red {
            forced: Some("fracture"),
        },
        reason: "Numbness after a high-energy mechanism",
    },
    TriageRule {
        when: Pred::Yes("A_rf_numbFoot"),
        effect: TriageEffect::Red { forced: None },
        reason: "Sensory changes in the foot",
    },
    TriageRule {
        when: Pred::Yes("A_rf_calfSwelling"),
        effect: TriageEffect::Red { forced: None },
        reason: "Unilateral calf swelling or tenderness",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::SingleIs("A_weightBear", "unableFourSteps"),
        effect: TriageEffect::Amber,
        reason: "Unable to weight-bear four steps",
    },
    TriageRule {
        when: Pred::SingleIs("A_swelling", "immediateHigh"),
        effect: TriageEffect::Amber,
        reason: "Immediate marked swelling after injury",
    },
    TriageRule {
        when: Pred::SliderAtLeast("A_stiffMorning", 30.0),
        effect: TriageEffect::Amber,
        reason: "Prolonged morning stiffness",
    },
    TriageRule {
        when: Pred::Yes("A_nightPain"),
        effect: TriageEffect::Amber,
        reason: "Night pain disturbing sleep",
    },
];

static GATES: &[GateRule] = &[
    GateRule {
        key: "lateral_sprain",
        contradicted_when: Pred::MultiAnsweredWithout("A_painSite", "lateralATFL"),
        why: "Pain location does not fit a lateral pattern",
    },
    GateRule {
        key: "medial_sprain",
        contradicted_when: Pred::MultiAnsweredWithout("A_painSite", "medialDeltoid"),
        why: "Pain location does not fit a medial pattern",
    },
    GateRule {
        key: "achilles",
        contradicted_when: Pred::MultiAnsweredWithout("A_painSite", "posteriorAchilles"),
        why: "No posterior heel-cord pain reported",
    },
];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "lateral_sprain",
        when: Pred::SingleIs("A_mech", "inversionRoll"),
        delta: 2.0,
        why: "Inversion roll mechanism",
    },
    ScoreRule {
        key: "lateral_sprain",
        when: Pred::MultiHas("A_painSite", "lateralATFL"),
        delta: 2.0,
        why: "Lateral ankle pain (ATFL/CFL region)",
    },
    ScoreRule {
        key: "lateral_sprain",
        when: Pred::Yes("A_pop"),
        delta: 0.5,
        why: "Felt a pop at the moment of injury",
    },
    ScoreRule {
        key: "lateral_sprain",
        when: Pred::SingleIs("A_swelling", "immediateHigh"),
        delta: 0.5,
        why: "Early swelling after injury",
    },
    ScoreRule {
        key: "medial_sprain",
        when: Pred::SingleIs("A_mech", "eversionTwist"),
        delta: 2.0,
        why: "Eversion twist mechanism",
    },
    ScoreRule {
        key: "medial_sprain",
        when: Pred::MultiHas("A_painSite", "medialDeltoid"),
        delta: 2.0,
        why: "Medial ankle pain over the deltoid ligament",
    },
    ScoreRule {
        key: "syndesmosis",
        when: Pred::SingleIs("A_mech", "eversionTwist"),
        delta: 1.0,
        why: "Eversion or external-rotation mechanism",
    },
    ScoreRule {
        key: "syndesmosis",
        when: Pred::MultiHas("A_painSite", "anteriorJoint"),
        delta: 1.0,
        why: "Pain over the anterior joint line",
    },
    ScoreRule {
        key: "syndesmosis",
        when: Pred::SingleIs("A_weightBear", "unableFourSteps"),
        delta: 0.5,
        why: "Struggling to weight-bear",
    },
    ScoreRule {
        key: "fracture",
        when: Pred::SingleIs("A_weightBear", "unableFourSteps"),
        delta: 2.0,
        why: "Unable to weight-bear four steps (Ottawa criterion)",
    },
    ScoreRule {
        key: "fracture",
        when: Pred::MultiHas("A_painSite", "baseFifthMet"),
        delta: 2.0,
        why: "Bony tenderness at the fifth metatarsal base",
    },
    ScoreRule {
        key: "fracture",
        when: Pred::MultiHas("A_painSite", "midfootNavicular"),
        delta: 1.5,
        why: "Bony tenderness over the navicular",
    },
    ScoreRule {
        key: "fracture",
        when: Pred::SingleIs("A_swelling", "immediateHigh"),
        delta: 0.5,
        why: "Immediate swelling after injury",
    },
    ScoreRule {
        key: "achilles",
        when: Pred::MultiHas("A_painSite", "posteriorAchilles"),
        delta: 2.0,
        why: "Posterior heel-cord pain",
    },
    ScoreRule {
        key: "achilles",
        when: Pred::SingleIs("A_mech", "landingJump"),
        delta: 1.0,
        why: "Push-off or landing mechanism",
    },
    ScoreRule {
        key: "instability_chronic",
        when: Pred::Yes("A_instability"),
        delta: 2.0,
        why: "Recurrent giving way",
    },
    ScoreRule {
        key: "instability_chronic",
        when: Pred::SingleIs("A_mech", "gradualOnset"),
        delta: 0.5,
        why: "Gradual onset without a single injury",
    },
    ScoreRule {
        key: "instability_chronic",
        when: Pred::Yes("A_priorSprain"),
        delta: 1.5,
        why: "Previous ankle sprains",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "lateral_sprain",
    when: Pred::All(&[
        Pred::SingleIs("A_weightBear", "unableFourSteps"),
        Pred::Any(&[
            Pred::MultiHas("A_painSite", "baseFifthMet"),
            Pred::MultiHas("A_painSite", "midfootNavicular"),
        ]),
    ]),
    delta: -1.5,
    why: "Ottawa-positive pattern favours fracture work-up",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "ankle",
    label: "Ankle",
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
            "Palpation per Ottawa landmarks",
        ],
        amber: &[
            "Observation and gait screen",
            "Ottawa ankle rules",
            "Neurovascular screen",
        ],
        red: &["Immediate neurovascular assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
        ],
    },
};
