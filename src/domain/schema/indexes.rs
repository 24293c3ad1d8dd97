//! `users` 컬렉션 인덱스 정의
//!
//! 인덱스 이름은 지정하지 않으며 서버 기본 이름(`email_1`, `is_active_1`)을 사용합니다.

use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    IndexModel,
};
use serde::Serialize;

/// 키 명세와 유니크 여부
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSpec {
    pub keys: Document,
    pub unique: bool,
}

impl IndexSpec {
    /// `createIndexes`로 전달할 모델을 생성합니다.
    ///
    /// 유니크가 아닌 인덱스에는 옵션을 붙이지 않습니다.
    pub fn to_model(&self) -> IndexModel {
        let builder = IndexModel::builder().keys(self.keys.clone());

        if self.unique {
            builder
                .options(IndexOptions::builder().unique(true).build())
                .build()
        } else {
            builder.build()
        }
    }

    /// 서버가 돌려준 인덱스 모델을 명세로 변환합니다.
    ///
    /// `unique` 옵션이 없으면 `false`로 취급합니다.
    pub fn from_model(model: &IndexModel) -> Self {
        let unique = model
            .options
            .as_ref()
            .and_then(|options| options.unique)
            .unwrap_or(false);

        Self {
            keys: model.keys.clone(),
            unique,
        }
    }

    /// 기본 `_id` 인덱스인지 확인합니다.
    pub fn is_id_index(&self) -> bool {
        self.keys == doc! { "_id": 1 }
    }
}

/// 이메일 유니크 인덱스: `{ email: 1 }`, `{ unique: true }`
pub fn email_unique_index() -> IndexSpec {
    IndexSpec {
        keys: doc! { "email": 1 },
        unique: true,
    }
}

/// 활성 상태 인덱스: `{ is_active: 1 }`
pub fn is_active_index() -> IndexSpec {
    IndexSpec {
        keys: doc! { "is_active": 1 },
        unique: false,
    }
}

/// 생성 순서대로 나열된 `users` 인덱스 명세
pub fn users_index_specs() -> Vec<IndexSpec> {
    vec![email_unique_index(), is_active_index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_index_is_unique_ascending() {
        let model = email_unique_index().to_model();

        assert_eq!(model.keys, doc! { "email": 1 });
        assert_eq!(model.options.and_then(|o| o.unique), Some(true));
    }

    #[test]
    fn test_is_active_index_has_no_options() {
        let model = is_active_index().to_model();

        assert_eq!(model.keys, doc! { "is_active": 1 });
        assert!(model.options.is_none());
    }

    #[test]
    fn test_index_order() {
        let specs = users_index_specs();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0], email_unique_index());
        assert_eq!(specs[1], is_active_index());
    }

    #[test]
    fn test_from_model_defaults_unique_to_false() {
        let model = IndexModel::builder().keys(doc! { "is_active": 1 }).build();

        assert_eq!(IndexSpec::from_model(&model), is_active_index());
    }

    #[test]
    fn test_id_index_detection() {
        let id_index = IndexSpec {
            keys: doc! { "_id": 1 },
            unique: false,
        };

        assert!(id_index.is_id_index());
        assert!(!email_unique_index().is_id_index());
    }
}
