#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: &'static str,
    pub prompt: &'static str,
    pub low: &'static str,
    pub high: &'static str,
    pub optional: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DomainDef {
    pub id: &'static str,
    pub title: &'static str,
    pub short_label: &'static str,
    pub description: &'static str,
    pub items: &'static [ItemDef],
}

pub const BUILTIN_VERSION: &str = "ashp-accp-ppcp-2024.1";

const PPCP_ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "ppcp_1",
        prompt: "COLLECT: Systematically obtains accurate and complete medication histories, relevant labs/vitals/clinical notes, and patient-specific data needed for assessment",
        low: "Misses critical data; requires guidance to complete medication reconciliation",
        high: "Comprehensively synthesizes all relevant data; proactively identifies discrepancies",
        optional: false,
    },
    ItemDef {
        id: "ppcp_2",
        prompt: "ASSESS: Accurately identifies, prioritizes, and communicates drug therapy problems and patient care needs using clinical reasoning",
        low: "Misses significant drug therapy problems; limited clinical reasoning",
        high: "Identifies complex, nuanced DTPs; integrates multiple data sources into sound clinical judgments",
        optional: false,
    },
    ItemDef {
        id: "ppcp_3",
        prompt: "PLAN: Develops individualized, evidence-based, patient-centered pharmacotherapy plans aligned with current clinical guidelines",
        low: "Plans lack evidence basis or are not patient-specific; guideline non-concordant",
        high: "Develops comprehensive individualized plans; applies guidelines contextually; considers full range of options",
        optional: false,
    },
    ItemDef {
        id: "ppcp_4",
        prompt: "IMPLEMENT: Effectively communicates and implements the care plan with the healthcare team, patient, and caregivers in a timely manner",
        low: "Difficulty implementing plans; communication gaps with team or patients",
        high: "Seamlessly implements plans; proactive and clear communication; ensures team and patient buy-in",
        optional: false,
    },
    ItemDef {
        id: "ppcp_5",
        prompt: "FOLLOW-UP/MONITOR: Establishes appropriate monitoring parameters for efficacy and safety, follows up consistently, and adjusts plans based on clinical response",
        low: "Monitoring incomplete or inconsistent; does not reliably follow up on clinical concerns",
        high: "Establishes comprehensive individualized monitoring; consistently follows through; optimizes therapy based on outcomes",
        optional: false,
    },
];

const DTM_ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "dtm_1",
        prompt: "Demonstrates current, accurate pharmacotherapy knowledge for common and complex conditions encountered on the unit (disease states, mechanisms, therapeutics)",
        low: "Knowledge gaps significantly impact recommendation quality",
        high: "Expert-level knowledge; serves as unit resource for complex and unusual clinical questions",
        optional: false,
    },
    ItemDef {
        id: "dtm_2",
        prompt: "Applies pharmacokinetic/pharmacodynamic principles to individualize drug dosing (renal/hepatic adjustment, TDM, special populations: obesity, ECMO, CRRT, etc.)",
        low: "PK/PD applications inaccurate or missed; requires guidance for adjustments",
        high: "Expert PK/PD application across all patient populations including complex cases",
        optional: false,
    },
    ItemDef {
        id: "dtm_3",
        prompt: "Proactively identifies and manages drug-drug interactions, adverse drug events, and medication safety concerns; prevents harm",
        low: "Misses significant interactions or ADEs; reactive rather than proactive",
        high: "Proactively identifies complex interactions and safety issues; implements effective mitigation strategies",
        optional: false,
    },
    ItemDef {
        id: "dtm_4",
        prompt: "Applies antimicrobial stewardship principles (de-escalation, IV-to-PO conversion, indication review, appropriate duration, culture-guided therapy)",
        low: "Limited stewardship engagement; rarely initiates stewardship interventions",
        high: "Champions stewardship on the unit; consistently applies all principles; proactively educates team",
        optional: false,
    },
    ItemDef {
        id: "dtm_5",
        prompt: "Retrieves, critically evaluates, and appropriately applies drug information and clinical evidence to patient care decisions (EBM skills)",
        low: "Drug information skills limited; applies evidence uncritically or inaccurately",
        high: "Expert evidence appraisal; synthesizes conflicting literature to guide individualized clinical decisions",
        optional: false,
    },
];

const COMM_ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "comm_1",
        prompt: "Provides clear, concise, clinically relevant verbal recommendations to physicians, APPs, nurses, and other healthcare team members",
        low: "Recommendations unclear or difficult to act upon; communication barriers with team",
        high: "Consistently delivers actionable, respected recommendations; adapts style to audience effectively",
        optional: false,
    },
    ItemDef {
        id: "comm_2",
        prompt: "Documents clinical interventions, SOAP notes, and recommendations accurately, completely, and in a timely manner per institutional standards",
        low: "Documentation incomplete, inaccurate, or untimely; misses significant interventions",
        high: "Documentation thorough, precise, and timely; writing is clinically useful to the entire care team",
        optional: false,
    },
    ItemDef {
        id: "comm_3",
        prompt: "Provides effective, tailored patient and caregiver education (medication counseling, discharge education, adherence counseling, health literacy assessment)",
        low: "Patient education missed, unclear, or not tailored to health literacy level",
        high: "Excellent patient educator; assesses comprehension; addresses barriers to adherence proactively",
        optional: false,
    },
    ItemDef {
        id: "comm_4",
        prompt: "Actively contributes meaningful pharmacotherapy input during interprofessional rounds and functions as a valued, integrated team member",
        low: "Limited rounds participation; pharmacy perspective underrepresented; passive team role",
        high: "Key rounds contributor; proactively raises pharmacotherapy concerns; widely valued by team",
        optional: false,
    },
    ItemDef {
        id: "comm_5",
        prompt: "Maintains professional, respectful communication with patients, families, and team members including in challenging, high-stress, or conflict situations",
        low: "Communication in difficult situations needs improvement; may create or escalate conflict",
        high: "Exceptional professional communication in all situations; models respectful de-escalation",
        optional: false,
    },
];

const SYS_ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "sys_1",
        prompt: "Identifies, reports, and acts on medication errors, near-misses, and adverse drug events; actively promotes a culture of medication safety",
        low: "Rarely identifies or reports safety events; limited engagement with safety culture",
        high: "Proactively identifies safety concerns; consistently reports events; drives safety culture improvements",
        optional: false,
    },
    ItemDef {
        id: "sys_2",
        prompt: "Participates in quality improvement projects, P&T/formulary activities, medication use evaluations, or other practice improvement initiatives",
        low: "Minimal QI involvement; not engaged in practice improvement activities",
        high: "Active QI leader/participant; initiates improvements; meaningfully contributes to P&T and formulary decisions",
        optional: false,
    },
    ItemDef {
        id: "sys_3",
        prompt: "Demonstrates current knowledge of institutional drug use policies, formulary restrictions, prior authorization processes, and regulatory requirements",
        low: "Limited policy awareness; frequently requires guidance on formulary and regulatory matters",
        high: "Expert in institutional policies; proactively applies, interprets, and educates others; identifies gaps",
        optional: false,
    },
    ItemDef {
        id: "sys_4",
        prompt: "Effectively manages time, workload, and clinical responsibilities; appropriately prioritizes patient care tasks including high-acuity situations",
        low: "Struggles with prioritization; workload management issues affect care quality; tasks incomplete",
        high: "Excellent time management; efficiently handles high-acuity workload; consistently meets all responsibilities",
        optional: false,
    },
];

const PROF_ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "prof_1",
        prompt: "Demonstrates professional accountability, ethical practice, and consistent adherence to standards of pharmacy practice and institutional policies",
        low: "Professional accountability concerns; inconsistent adherence to practice standards",
        high: "Exemplary professional standards; highly accountable; advocates for patients and the profession",
        optional: false,
    },
    ItemDef {
        id: "prof_2",
        prompt: "Engages in self-directed, continuous professional development; proactively identifies and addresses own knowledge and skill gaps",
        low: "Limited self-directed learning; does not proactively address knowledge gaps",
        high: "Highly motivated self-learner; continuously improves; proactively seeks and addresses gaps",
        optional: false,
    },
    ItemDef {
        id: "prof_3",
        prompt: "Preceptors, mentors, or educates pharmacy students, residents, and/or interprofessional learners (if applicable to role)",
        low: "Limited teaching engagement; not effectively contributing to learner development",
        high: "Outstanding preceptor/educator; positively impacts learner development; sought as teaching resource",
        optional: true,
    },
    ItemDef {
        id: "prof_4",
        prompt: "Demonstrates leadership: takes initiative, adapts to change, advocates for patients and the profession, and fosters collaborative improvement",
        low: "Limited leadership initiative; primarily reactive; does not advocate for improvements",
        high: "Strong leader; consistently demonstrates initiative; champions patient care and practice advancement",
        optional: false,
    },
];

const BUILTIN_DOMAINS: &[DomainDef] = &[
    DomainDef {
        id: "ppcp",
        title: "Domain 1 — Pharmacists' Patient Care Process (PPCP)",
        short_label: "Patient Care Process",
        description: "The JCPP Pharmacists' Patient Care Process is the standard patient care framework endorsed by ASHP, ACCP, APhA, and all major pharmacy organizations. Mastery of the PPCP aligns with ASHP Accreditation Standard R1 (Patient Care) and ACCP's Direct Patient Care competency domain.",
        items: PPCP_ITEMS,
    },
    DomainDef {
        id: "dtm",
        title: "Domain 2 — Drug Therapy Management & Clinical Knowledge",
        short_label: "Drug Therapy & Knowledge",
        description: "Reflects ACCP's Pharmacotherapy Knowledge competency domain and ASHP practice standards for acute care clinical pharmacists. Includes clinical pharmacology, PK/PD, antimicrobial stewardship, and evidence-based medicine as required under ASHP R1 objectives.",
        items: DTM_ITEMS,
    },
    DomainDef {
        id: "comm",
        title: "Domain 3 — Communication, Documentation & Interprofessional Collaboration",
        short_label: "Communication & Collaboration",
        description: "Aligns with ACCP's Communication competency domain and ASHP Accreditation Standard R1 objectives for interprofessional collaboration, patient counseling, and clinical documentation. Reflects Joint Commission patient education and documentation standards.",
        items: COMM_ITEMS,
    },
    DomainDef {
        id: "sys",
        title: "Domain 4 — Systems-Based Practice, Quality & Patient Safety",
        short_label: "Systems, Quality & Safety",
        description: "Aligns with ASHP Accreditation Standard R2 (Advancing Practice and Improving Patient Care), ACCP's Systems-Based Care and Population Health domain, and Joint Commission National Patient Safety Goals. Includes QI participation, medication safety, and policy compliance.",
        items: SYS_ITEMS,
    },
    DomainDef {
        id: "prof",
        title: "Domain 5 — Professional Development, Leadership & Education",
        short_label: "Leadership & Development",
        description: "Aligns with ASHP Accreditation Standards R3 (Leadership and Management) and R4 (Teaching, Education, and Dissemination of Knowledge), and ACCP's Professionalism and Continuing Professional Development domains. Reflects ASHP PAI 2030 practice advancement standards.",
        items: PROF_ITEMS,
    },
];

pub fn builtin_domains() -> &'static [DomainDef] {
    BUILTIN_DOMAINS
}
