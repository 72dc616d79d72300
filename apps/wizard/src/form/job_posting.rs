use serde::{Deserialize, Serialize};

use crate::form::schema::{FormField, FormRecord, Step};

/// An employer's job posting draft. Not persisted; submission only logs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPostingRecord {
    pub company_name: String,
    pub job_title: String,
    pub work_location: String,
    pub recruitment_period: String,
    pub qualifications: String,
    pub ideal_candidate: String,
    pub preferred_qualifications: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobPostingField {
    CompanyName,
    JobTitle,
    WorkLocation,
    RecruitmentPeriod,
    Qualifications,
    IdealCandidate,
    PreferredQualifications,
    JobDescription,
}

impl FormField for JobPostingField {
    const ALL: &'static [Self] = &[
        JobPostingField::CompanyName,
        JobPostingField::JobTitle,
        JobPostingField::WorkLocation,
        JobPostingField::RecruitmentPeriod,
        JobPostingField::Qualifications,
        JobPostingField::IdealCandidate,
        JobPostingField::PreferredQualifications,
        JobPostingField::JobDescription,
    ];

    fn name(self) -> &'static str {
        match self {
            JobPostingField::CompanyName => "companyName",
            JobPostingField::JobTitle => "jobTitle",
            JobPostingField::WorkLocation => "workLocation",
            JobPostingField::RecruitmentPeriod => "recruitmentPeriod",
            JobPostingField::Qualifications => "qualifications",
            JobPostingField::IdealCandidate => "idealCandidate",
            JobPostingField::PreferredQualifications => "preferredQualifications",
            JobPostingField::JobDescription => "jobDescription",
        }
    }

    fn label(self) -> &'static str {
        match self {
            JobPostingField::CompanyName => "Company name",
            JobPostingField::JobTitle => "Job title",
            JobPostingField::WorkLocation => "Work location",
            JobPostingField::RecruitmentPeriod => "Recruitment period",
            JobPostingField::Qualifications => "Qualifications",
            JobPostingField::IdealCandidate => "Ideal candidate",
            JobPostingField::PreferredQualifications => "Preferred qualifications",
            JobPostingField::JobDescription => "Job description",
        }
    }
}

static JOB_POSTING_STEPS: [Step<JobPostingField>; 3] = [
    Step {
        id: "basic",
        label: "Basic info",
        icon: "🏢",
        fields: &[
            JobPostingField::CompanyName,
            JobPostingField::JobTitle,
            JobPostingField::WorkLocation,
            JobPostingField::RecruitmentPeriod,
        ],
        required_fields: &[
            JobPostingField::CompanyName,
            JobPostingField::JobTitle,
            JobPostingField::WorkLocation,
            JobPostingField::RecruitmentPeriod,
        ],
    },
    Step {
        id: "requirements",
        label: "Requirements",
        icon: "👤",
        fields: &[
            JobPostingField::Qualifications,
            JobPostingField::IdealCandidate,
            JobPostingField::PreferredQualifications,
        ],
        required_fields: &[
            JobPostingField::Qualifications,
            JobPostingField::IdealCandidate,
            JobPostingField::PreferredQualifications,
        ],
    },
    Step {
        id: "details",
        label: "Duties",
        icon: "📋",
        fields: &[JobPostingField::JobDescription],
        required_fields: &[JobPostingField::JobDescription],
    },
];

impl JobPostingRecord {
    fn slot(&self, field: JobPostingField) -> &String {
        match field {
            JobPostingField::CompanyName => &self.company_name,
            JobPostingField::JobTitle => &self.job_title,
            JobPostingField::WorkLocation => &self.work_location,
            JobPostingField::RecruitmentPeriod => &self.recruitment_period,
            JobPostingField::Qualifications => &self.qualifications,
            JobPostingField::IdealCandidate => &self.ideal_candidate,
            JobPostingField::PreferredQualifications => &self.preferred_qualifications,
            JobPostingField::JobDescription => &self.job_description,
        }
    }

    fn slot_mut(&mut self, field: JobPostingField) -> &mut String {
        match field {
            JobPostingField::CompanyName => &mut self.company_name,
            JobPostingField::JobTitle => &mut self.job_title,
            JobPostingField::WorkLocation => &mut self.work_location,
            JobPostingField::RecruitmentPeriod => &mut self.recruitment_period,
            JobPostingField::Qualifications => &mut self.qualifications,
            JobPostingField::IdealCandidate => &mut self.ideal_candidate,
            JobPostingField::PreferredQualifications => &mut self.preferred_qualifications,
            JobPostingField::JobDescription => &mut self.job_description,
        }
    }
}

impl FormRecord for JobPostingRecord {
    type Field = JobPostingField;

    fn steps() -> &'static [Step<JobPostingField>] {
        &JOB_POSTING_STEPS
    }

    fn get(&self, field: JobPostingField) -> &str {
        self.slot(field)
    }

    fn set(&mut self, field: JobPostingField, value: String) {
        *self.slot_mut(field) = value;
    }
}
