//! 초기화 결과 검증
//!
//! 서버 메타데이터(`usersInfo`, `listCollections`, `listIndexes`)를 읽어
//! 초기화 절차가 남긴 상태가 기대와 정확히 일치하는지 확인합니다. 읽기 전용입니다.

use std::collections::BTreeSet;

use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, from_document, Document};
use serde::{Deserialize, Serialize};

use crate::{
    domain::schema::{app_user_roles, users_index_specs, users_validator, IndexSpec, RoleGrant, USERS_COLLECTION},
    errors::{AppError, AppResult},
};

/// `usersInfo` 응답의 사용자 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user: String,
    pub db: String,
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

/// 서버에서 읽은 데이터베이스 상태
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateReport {
    pub database: String,
    pub users: Vec<UserInfo>,
    pub collections: Vec<String>,
    pub validator: Option<Document>,
    /// `_id` 인덱스를 제외한 `users` 인덱스
    pub indexes: Vec<IndexSpec>,
}

impl StateReport {
    /// 서버 상태를 읽어옵니다.
    pub async fn inspect(database: &mongodb::Database, username: &str) -> AppResult<Self> {
        let response = database
            .run_command(doc! { "usersInfo": username })
            .await?;
        let users = parse_users_info(&response)?;

        let collections: Vec<_> = database
            .list_collections()
            .await?
            .try_collect()
            .await?;

        let validator = collections
            .iter()
            .find(|spec| spec.name == USERS_COLLECTION)
            .and_then(|spec| spec.options.validator.clone());

        let mut collection_names: Vec<String> = collections.into_iter().map(|spec| spec.name).collect();
        collection_names.sort();

        let indexes = if collection_names.iter().any(|name| name == USERS_COLLECTION) {
            let models: Vec<_> = database
                .collection::<Document>(USERS_COLLECTION)
                .list_indexes()
                .await?
                .try_collect()
                .await?;

            models
                .iter()
                .map(IndexSpec::from_model)
                .filter(|spec| !spec.is_id_index())
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            database: database.name().to_string(),
            users,
            collections: collection_names,
            validator,
            indexes,
        })
    }

    /// 기대 상태와 다른 점을 모두 나열합니다.
    ///
    /// 비어 있으면 초기화 결과가 정확히 일치하는 것입니다.
    pub fn mismatches(&self, username: &str) -> Vec<String> {
        let mut problems = Vec::new();

        match self.users.as_slice() {
            [user] if user.user == username => {
                let actual: BTreeSet<&RoleGrant> = user.roles.iter().collect();
                let roles = app_user_roles(&self.database);
                let expected: BTreeSet<&RoleGrant> = roles.iter().collect();

                if actual != expected || user.roles.len() != roles.len() {
                    problems.push(format!("'{}' 역할이 다릅니다: {:?}", username, user.roles));
                }
            }
            [] => problems.push(format!("사용자 '{}'가 없습니다", username)),
            users => problems.push(format!(
                "사용자 '{}' 조회 결과가 다릅니다: {:?}",
                username,
                users.iter().map(|u| u.user.as_str()).collect::<Vec<_>>()
            )),
        }

        if self.collections != [USERS_COLLECTION] {
            problems.push(format!("컬렉션 목록이 다릅니다: {:?}", self.collections));
        }

        match &self.validator {
            Some(validator) if *validator == users_validator() => {}
            Some(validator) => problems.push(format!("검증기가 다릅니다: {}", validator)),
            None => problems.push(format!("'{}' 컬렉션에 검증기가 없습니다", USERS_COLLECTION)),
        }

        let expected_indexes = users_index_specs();
        let indexes_match = self.indexes.len() == expected_indexes.len()
            && expected_indexes.iter().all(|spec| self.indexes.contains(spec));
        if !indexes_match {
            problems.push(format!("인덱스가 다릅니다: {:?}", self.indexes));
        }

        problems
    }

    /// 불일치가 있으면 `VerificationError`를 반환합니다.
    pub fn ensure_matches(&self, username: &str) -> AppResult<()> {
        let problems = self.mismatches(username);

        if problems.is_empty() {
            info!("🔍 초기화 상태 검증 통과: {}", self.database);
            Ok(())
        } else {
            Err(AppError::VerificationError(problems.join("; ")))
        }
    }
}

fn parse_users_info(response: &Document) -> AppResult<Vec<UserInfo>> {
    let users = response
        .get_array("users")
        .map_err(|e| AppError::DatabaseError(format!("usersInfo 응답 형식 오류: {}", e)))?;

    users
        .iter()
        .filter_map(|value| value.as_document())
        .map(|user| {
            from_document::<UserInfo>(user.clone())
                .map_err(|e| AppError::DatabaseError(format!("usersInfo 사용자 파싱 실패: {}", e)))
        })
        .collect()
}
