//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 생성과 수정 시점에 필드 제약을 강제하여, 유효하지 않은 상태의
//! 엔티티 인스턴스가 존재할 수 없도록 보장합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::core::errors::AppError;

/// 이메일 형식 검증용 정규식 (`local@domain.tld` 형태)
///
/// 로컬 파트는 영문/숫자/`._%+-`, 도메인은 영문/숫자/`.-`,
/// TLD는 2자 이상의 영문만 허용합니다.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("이메일 정규식 컴파일 실패")
});

/// 사용자 엔티티 필드 검증 에러
///
/// 어떤 필드가 어떤 규칙을 위반했는지 구분 가능한 형태로 표현합니다.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// 이름이 2자 미만인 경우
    #[error("name must be at least 2 characters long")]
    InvalidName,

    /// 이메일이 `local@domain.tld` 형식이 아닌 경우
    #[error("invalid email format")]
    InvalidEmail,

    /// 나이가 0-120 범위를 벗어난 경우
    #[error("age must be between 0 and 120")]
    InvalidAge,
}

impl From<UserValidationError> for AppError {
    fn from(err: UserValidationError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// 사용자 엔티티
///
/// 시스템의 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 모든 필드는 비공개이며 검증된 팩토리/세터를 통해서만 변경할 수 있습니다.
///
/// ## 불변식
///
/// - 생성된 인스턴스는 항상 이름/이메일/나이 제약을 모두 만족합니다
/// - ID는 저장소가 할당하며, 할당 이후 변경되지 않습니다
/// - 세터가 실패하면 엔티티는 수정되지 않은 상태로 남습니다
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 저장소가 할당하는 식별자 (생성 직후에는 미할당 상태)
    id: Option<i64>,
    name: String,
    email: String,
    age: i32,
}

impl User {
    /// 새 사용자 엔티티를 생성합니다 (ID 미할당)
    ///
    /// 모든 필드에 대한 검증을 수행하며, 하나라도 실패하면
    /// 부분적으로 구성된 객체 대신 에러를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `UserValidationError::InvalidName` - 이름이 2자 미만
    /// * `UserValidationError::InvalidEmail` - 이메일 형식 위반
    /// * `UserValidationError::InvalidAge` - 나이가 0-120 범위 밖
    pub fn new(name: &str, email: &str, age: i32) -> Result<Self, UserValidationError> {
        let mut user = Self {
            id: None,
            name: String::new(),
            email: String::new(),
            age: 0,
        };

        user.set_name(name)?;
        user.set_email(email)?;
        user.set_age(age)?;

        Ok(user)
    }

    /// 알려진 ID로 사용자 엔티티를 재구성합니다
    ///
    /// 저장소에서 레코드를 복원할 때 사용되며, `new`와 동일한 검증을 거칩니다.
    pub fn with_id(id: i64, name: &str, email: &str, age: i32) -> Result<Self, UserValidationError> {
        let mut user = Self::new(name, email, age)?;
        user.id = Some(id);
        Ok(user)
    }

    /// 사용자의 식별자를 반환합니다 (미할당 시 None)
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// 사용자의 이름을 반환합니다
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 사용자의 이메일 주소를 반환합니다
    pub fn email(&self) -> &str {
        &self.email
    }

    /// 사용자의 나이를 반환합니다
    pub fn age(&self) -> i32 {
        self.age
    }

    /// 이름을 변경합니다. 2자 미만이면 실패하며 엔티티는 수정되지 않습니다.
    pub fn set_name(&mut self, name: &str) -> Result<(), UserValidationError> {
        if name.chars().count() < 2 {
            return Err(UserValidationError::InvalidName);
        }
        self.name = name.to_string();
        Ok(())
    }

    /// 이메일을 변경합니다. 형식 위반 시 실패하며 엔티티는 수정되지 않습니다.
    pub fn set_email(&mut self, email: &str) -> Result<(), UserValidationError> {
        if !EMAIL_REGEX.is_match(email) {
            return Err(UserValidationError::InvalidEmail);
        }
        self.email = email.to_string();
        Ok(())
    }

    /// 나이를 변경합니다. 0-120 범위 밖이면 실패하며 엔티티는 수정되지 않습니다.
    pub fn set_age(&mut self, age: i32) -> Result<(), UserValidationError> {
        if !(0..=120).contains(&age) {
            return Err(UserValidationError::InvalidAge);
        }
        self.age = age;
        Ok(())
    }
}
