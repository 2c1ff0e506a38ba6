use super::entities::{
    Certification, Education, Experience, Extracurricular, PersonalInfo, Project, SkillCategory,
};

/// Editor-side validation errors. These are reported synchronously and never
/// reach the persistence layer.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{entity}: field '{field}' cannot be empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: duplicate natural key '{key}'")]
    DuplicateKey { entity: &'static str, key: String },
}

fn check_keys<'a, I>(entity: &'static str, field: &'static str, keys: I) -> Result<(), ValidationError>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(ValidationError::EmptyField { entity, field });
        }
        if seen.contains(&key) {
            return Err(ValidationError::DuplicateKey {
                entity,
                key: key.to_string(),
            });
        }
        seen.push(key);
    }
    Ok(())
}

pub fn validate_personal_info(info: &PersonalInfo) -> Result<(), ValidationError> {
    let required: [(&'static str, &str); 3] = [
        ("name", &info.name),
        ("title", &info.title),
        ("email", &info.email),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                entity: "personal info",
                field,
            });
        }
    }
    Ok(())
}

pub fn validate_skills(skills: &[SkillCategory]) -> Result<(), ValidationError> {
    check_keys("skill category", "category", skills.iter().map(|c| c.category.as_str()))?;
    for category in skills {
        check_keys("skill item", "name", category.items.iter().map(|i| i.name.as_str()))?;
    }
    Ok(())
}

pub fn validate_experience(experience: &[Experience]) -> Result<(), ValidationError> {
    check_keys("experience", "company", experience.iter().map(|e| e.company.as_str()))
}

pub fn validate_education(education: &[Education]) -> Result<(), ValidationError> {
    check_keys("education", "degree", education.iter().map(|e| e.degree.as_str()))
}

pub fn validate_certifications(certifications: &[Certification]) -> Result<(), ValidationError> {
    check_keys("certification", "name", certifications.iter().map(|c| c.name.as_str()))
}

pub fn validate_extracurricular(entries: &[Extracurricular]) -> Result<(), ValidationError> {
    check_keys("extracurricular", "role", entries.iter().map(|e| e.role.as_str()))
}

pub fn validate_projects(projects: &[Project]) -> Result<(), ValidationError> {
    check_keys("project", "title", projects.iter().map(|p| p.title.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::seed::seed_data;

    #[test]
    fn test_seed_data_passes_all_checks() {
        let seed = seed_data();
        assert!(validate_personal_info(&seed.personal_info).is_ok());
        assert!(validate_skills(&seed.skills).is_ok());
        assert!(validate_experience(&seed.experience).is_ok());
        assert!(validate_education(&seed.education).is_ok());
        assert!(validate_certifications(&seed.certifications).is_ok());
        assert!(validate_extracurricular(&seed.extracurricular).is_ok());
        assert!(validate_projects(&seed.projects).is_ok());
    }

    #[test]
    fn test_duplicate_company_is_rejected() {
        let mut experience = seed_data().experience;
        let duplicate = experience[0].clone();
        experience.push(duplicate);

        let err = validate_experience(&experience).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateKey { entity: "experience", .. }));
    }

    #[test]
    fn test_blank_natural_key_is_rejected() {
        let mut projects = seed_data().projects;
        projects[0].title = "   ".into();

        let err = validate_projects(&projects).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                entity: "project",
                field: "title"
            }
        );
    }

    #[test]
    fn test_duplicate_skill_item_within_category_is_rejected() {
        let mut skills = seed_data().skills;
        let duplicate = skills[0].items[0].clone();
        skills[0].items.push(duplicate);

        let err = validate_skills(&skills).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateKey { entity: "skill item", .. }));
    }

    #[test]
    fn test_missing_personal_info_name_is_rejected() {
        let mut info = seed_data().personal_info;
        info.name = String::new();

        let err = validate_personal_info(&info).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                entity: "personal info",
                field: "name"
            }
        );
    }
}
