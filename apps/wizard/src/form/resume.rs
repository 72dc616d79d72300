use serde::{Deserialize, Serialize};

use crate::form::schema::{Choice, FieldFormat, FormField, FormRecord, Step};

/// A job seeker's resume. One per user, persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    // Personal
    pub name: String,
    pub address: String,
    pub gender: String,
    pub birth_year: String,
    pub mobile: String,
    pub email: String,
    pub phone: String,
    // Education
    pub school_name: String,
    pub attendance_period: String,
    pub attendance_status: String,
    pub gpa: String,
    pub major: String,
    // Career intent
    pub desired_job: String,
    pub has_experience: String,
    pub job_description: String,
    pub desired_location: String,
    pub desired_salary: String,
    pub employment_type: String,
    pub working_hours: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResumeField {
    Name,
    Address,
    Gender,
    BirthYear,
    Mobile,
    Email,
    Phone,
    SchoolName,
    AttendancePeriod,
    AttendanceStatus,
    Gpa,
    Major,
    DesiredJob,
    HasExperience,
    JobDescription,
    DesiredLocation,
    DesiredSalary,
    EmploymentType,
    WorkingHours,
}

pub const GENDER_CHOICES: &[Choice] = &[
    Choice { value: "male", label: "Male" },
    Choice { value: "female", label: "Female" },
];

pub const ATTENDANCE_STATUS_CHOICES: &[Choice] = &[
    Choice { value: "graduated", label: "Graduated" },
    Choice { value: "attending", label: "Attending" },
    Choice { value: "onLeave", label: "On leave" },
    Choice { value: "dropped", label: "Dropped out" },
];

pub const EMPLOYMENT_TYPE_CHOICES: &[Choice] = &[
    Choice { value: "fullTime", label: "Full-time" },
    Choice { value: "contract", label: "Contract" },
    Choice { value: "partTime", label: "Part-time" },
    Choice { value: "internship", label: "Internship" },
    Choice { value: "freelance", label: "Freelance" },
];

impl FormField for ResumeField {
    const ALL: &'static [Self] = &[
        ResumeField::Name,
        ResumeField::Address,
        ResumeField::Gender,
        ResumeField::BirthYear,
        ResumeField::Mobile,
        ResumeField::Email,
        ResumeField::Phone,
        ResumeField::SchoolName,
        ResumeField::AttendancePeriod,
        ResumeField::AttendanceStatus,
        ResumeField::Gpa,
        ResumeField::Major,
        ResumeField::DesiredJob,
        ResumeField::HasExperience,
        ResumeField::JobDescription,
        ResumeField::DesiredLocation,
        ResumeField::DesiredSalary,
        ResumeField::EmploymentType,
        ResumeField::WorkingHours,
    ];

    fn name(self) -> &'static str {
        match self {
            ResumeField::Name => "name",
            ResumeField::Address => "address",
            ResumeField::Gender => "gender",
            ResumeField::BirthYear => "birthYear",
            ResumeField::Mobile => "mobile",
            ResumeField::Email => "email",
            ResumeField::Phone => "phone",
            ResumeField::SchoolName => "schoolName",
            ResumeField::AttendancePeriod => "attendancePeriod",
            ResumeField::AttendanceStatus => "attendanceStatus",
            ResumeField::Gpa => "gpa",
            ResumeField::Major => "major",
            ResumeField::DesiredJob => "desiredJob",
            ResumeField::HasExperience => "hasExperience",
            ResumeField::JobDescription => "jobDescription",
            ResumeField::DesiredLocation => "desiredLocation",
            ResumeField::DesiredSalary => "desiredSalary",
            ResumeField::EmploymentType => "employmentType",
            ResumeField::WorkingHours => "workingHours",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ResumeField::Name => "Full name",
            ResumeField::Address => "Address",
            ResumeField::Gender => "Gender",
            ResumeField::BirthYear => "Birth year",
            ResumeField::Mobile => "Mobile phone",
            ResumeField::Email => "Email",
            ResumeField::Phone => "Landline",
            ResumeField::SchoolName => "School",
            ResumeField::AttendancePeriod => "Attendance period",
            ResumeField::AttendanceStatus => "Attendance status",
            ResumeField::Gpa => "GPA",
            ResumeField::Major => "Major",
            ResumeField::DesiredJob => "Desired job",
            ResumeField::HasExperience => "Experience",
            ResumeField::JobDescription => "Desired duties",
            ResumeField::DesiredLocation => "Desired location",
            ResumeField::DesiredSalary => "Desired salary",
            ResumeField::EmploymentType => "Employment type",
            ResumeField::WorkingHours => "Working hours",
        }
    }

    fn format(self) -> FieldFormat {
        match self {
            ResumeField::Email => FieldFormat::Email,
            ResumeField::Mobile => FieldFormat::Mobile,
            ResumeField::BirthYear => FieldFormat::BirthYear,
            _ => FieldFormat::Text,
        }
    }

    fn choices(self) -> Option<&'static [Choice]> {
        match self {
            ResumeField::Gender => Some(GENDER_CHOICES),
            ResumeField::AttendanceStatus => Some(ATTENDANCE_STATUS_CHOICES),
            ResumeField::EmploymentType => Some(EMPLOYMENT_TYPE_CHOICES),
            _ => None,
        }
    }
}

static RESUME_STEPS: [Step<ResumeField>; 4] = [
    Step {
        id: "personal",
        label: "Personal info",
        icon: "👤",
        fields: &[
            ResumeField::Name,
            ResumeField::Email,
            ResumeField::Address,
            ResumeField::Gender,
            ResumeField::BirthYear,
            ResumeField::Mobile,
            ResumeField::Phone,
        ],
        required_fields: &[
            ResumeField::Name,
            ResumeField::Email,
            ResumeField::Address,
            ResumeField::Gender,
            ResumeField::BirthYear,
            ResumeField::Mobile,
        ],
    },
    Step {
        id: "education",
        label: "Education",
        icon: "🎓",
        fields: &[
            ResumeField::SchoolName,
            ResumeField::Major,
            ResumeField::AttendancePeriod,
            ResumeField::AttendanceStatus,
            ResumeField::Gpa,
        ],
        required_fields: &[
            ResumeField::SchoolName,
            ResumeField::Major,
            ResumeField::AttendancePeriod,
            ResumeField::AttendanceStatus,
        ],
    },
    Step {
        id: "career",
        label: "Desired job",
        icon: "💼",
        fields: &[
            ResumeField::DesiredJob,
            ResumeField::HasExperience,
            ResumeField::JobDescription,
        ],
        required_fields: &[ResumeField::DesiredJob, ResumeField::HasExperience],
    },
    Step {
        id: "conditions",
        label: "Working conditions",
        icon: "📍",
        fields: &[
            ResumeField::DesiredLocation,
            ResumeField::DesiredSalary,
            ResumeField::EmploymentType,
            ResumeField::WorkingHours,
        ],
        required_fields: &[ResumeField::DesiredLocation, ResumeField::DesiredSalary],
    },
];

impl ResumeRecord {
    fn slot(&self, field: ResumeField) -> &String {
        match field {
            ResumeField::Name => &self.name,
            ResumeField::Address => &self.address,
            ResumeField::Gender => &self.gender,
            ResumeField::BirthYear => &self.birth_year,
            ResumeField::Mobile => &self.mobile,
            ResumeField::Email => &self.email,
            ResumeField::Phone => &self.phone,
            ResumeField::SchoolName => &self.school_name,
            ResumeField::AttendancePeriod => &self.attendance_period,
            ResumeField::AttendanceStatus => &self.attendance_status,
            ResumeField::Gpa => &self.gpa,
            ResumeField::Major => &self.major,
            ResumeField::DesiredJob => &self.desired_job,
            ResumeField::HasExperience => &self.has_experience,
            ResumeField::JobDescription => &self.job_description,
            ResumeField::DesiredLocation => &self.desired_location,
            ResumeField::DesiredSalary => &self.desired_salary,
            ResumeField::EmploymentType => &self.employment_type,
            ResumeField::WorkingHours => &self.working_hours,
        }
    }

    fn slot_mut(&mut self, field: ResumeField) -> &mut String {
        match field {
            ResumeField::Name => &mut self.name,
            ResumeField::Address => &mut self.address,
            ResumeField::Gender => &mut self.gender,
            ResumeField::BirthYear => &mut self.birth_year,
            ResumeField::Mobile => &mut self.mobile,
            ResumeField::Email => &mut self.email,
            ResumeField::Phone => &mut self.phone,
            ResumeField::SchoolName => &mut self.school_name,
            ResumeField::AttendancePeriod => &mut self.attendance_period,
            ResumeField::AttendanceStatus => &mut self.attendance_status,
            ResumeField::Gpa => &mut self.gpa,
            ResumeField::Major => &mut self.major,
            ResumeField::DesiredJob => &mut self.desired_job,
            ResumeField::HasExperience => &mut self.has_experience,
            ResumeField::JobDescription => &mut self.job_description,
            ResumeField::DesiredLocation => &mut self.desired_location,
            ResumeField::DesiredSalary => &mut self.desired_salary,
            ResumeField::EmploymentType => &mut self.employment_type,
            ResumeField::WorkingHours => &mut self.working_hours,
        }
    }
}

impl FormRecord for ResumeRecord {
    type Field = ResumeField;

    fn steps() -> &'static [Step<ResumeField>] {
        &RESUME_STEPS
    }

    fn get(&self, field: ResumeField) -> &str {
        self.slot(field)
    }

    fn set(&mut self, field: ResumeField, value: String) {
        *self.slot_mut(field) = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_record_is_blank() {
        let record = ResumeRecord::default();
        assert!(ResumeField::ALL.iter().all(|&f| record.get(f).is_empty()));
    }

    #[test]
    fn test_set_get_touches_only_target_field() {
        let mut record = ResumeRecord::default();
        record.set(ResumeField::BirthYear, "1990".into());
        assert_eq!(record.birth_year, "1990");
        for &field in ResumeField::ALL {
            if field != ResumeField::BirthYear {
                assert!(record.get(field).is_empty(), "{field:?} changed");
            }
        }
    }

    #[test]
    fn test_serialized_keys_match_field_names() {
        let value = serde_json::to_value(ResumeRecord::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), ResumeField::ALL.len());
        for field in ResumeField::ALL {
            assert!(object.contains_key(field.name()), "missing key {}", field.name());
        }
    }

    #[test]
    fn test_partial_snapshot_fills_blanks() {
        let record: ResumeRecord =
            serde_json::from_value(json!({ "name": "Kim", "birthYear": "1990" })).unwrap();
        assert_eq!(record.name, "Kim");
        assert_eq!(record.birth_year, "1990");
        assert!(record.email.is_empty());
    }

    #[test]
    fn test_step_schema() {
        let steps = ResumeRecord::steps();
        let ids: Vec<_> = steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["personal", "education", "career", "conditions"]);
        assert_eq!(ResumeRecord::required_field_count(), 14);
        assert!(!steps[0].requires(&ResumeField::Phone));
        assert!(steps[0].requires(&ResumeField::Mobile));
    }

    #[test]
    fn test_every_field_appears_on_exactly_one_step() {
        for &field in ResumeField::ALL {
            let count = ResumeRecord::steps()
                .iter()
                .filter(|s| s.fields.contains(&field))
                .count();
            assert_eq!(count, 1, "{field:?}");
        }
    }

    #[test]
    fn test_choice_fields() {
        assert_eq!(ResumeField::Gender.choices().map(<[_]>::len), Some(2));
        assert_eq!(ResumeField::AttendanceStatus.choices().map(<[_]>::len), Some(4));
        assert_eq!(ResumeField::EmploymentType.choices().map(<[_]>::len), Some(5));
        assert!(ResumeField::Name.choices().is_none());
    }
}
