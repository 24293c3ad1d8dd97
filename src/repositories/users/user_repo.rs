//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 문서 형태 검사와 이메일 중복 검사는 서버(검증기, 유니크 인덱스)에 맡기고,
//! 서버 에러는 [`AppError`] 분류를 거쳐 원본 메시지와 함께 반환됩니다.

use std::sync::Arc;

use mongodb::{
    bson::{doc, Document},
    Collection,
};
use validator::Validate;

use crate::{
    db::Database,
    domain::{entities::users::UserDocument, schema::USERS_COLLECTION},
    errors::{AppError, AppResult},
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **SchemaValidationError**: 검증기 거부 (코드 121) 또는 로컬 이메일 검증 실패
/// - **ConstraintViolationError**: 이메일 중복 (코드 11000)
/// - **DatabaseError**: 기타 서버 에러
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database);
///
/// let created = repo.create(UserDocument::new(email, hashed_password)).await?;
/// let found = repo.find_by_email("a@b.co").await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(USERS_COLLECTION)
    }

    /// 사용자 문서를 생성합니다.
    ///
    /// 이메일 형식을 먼저 로컬에서 검사한 뒤 저장하며, 생성된 `_id`를 채워서 반환합니다.
    pub async fn create(&self, mut user: UserDocument) -> AppResult<UserDocument> {
        user.validate()
            .map_err(|e| AppError::SchemaValidationError(e.to_string()))?;

        let result = self
            .collection::<UserDocument>()
            .insert_one(&user)
            .await?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 임의의 문서를 그대로 저장합니다.
    ///
    /// 로컬 검사를 거치지 않으므로 서버 검증기의 판단이 그대로 드러납니다.
    pub async fn insert_raw(&self, document: Document) -> AppResult<()> {
        self.collection::<Document>()
            .insert_one(document)
            .await?;

        Ok(())
    }

    /// 이메일 주소로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<UserDocument>> {
        let user = self
            .collection::<UserDocument>()
            .find_one(doc! { "email": email })
            .await?;

        Ok(user)
    }

    /// 컬렉션의 전체 문서 수
    pub async fn count(&self) -> AppResult<u64> {
        let count = self
            .collection::<Document>()
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }
}
