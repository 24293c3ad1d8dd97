//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 초기화된 컬렉션에 문서를 쓰고 읽는 리포지토리를 제공합니다.
//! 검증기와 유니크 인덱스가 실제로 동작하는지 확인할 때 사용됩니다.

pub mod users;
