//! # MongoDB 사용자 리포지토리
//!
//! `STORAGE_BACKEND=mongodb`일 때 사용하는 영속 저장소입니다.
//!
//! ## 컬렉션 구조
//!
//! - **users** (이름 설정 가능): `_id`가 정수 사용자 ID인 문서
//! - **counters**: `{ _id: "<컬렉션명>", seq: <마지막 ID> }`
//!
//! ## 인덱스
//!
//! - `email_unique`: `email` 유니크. 서비스의 중복 검사와 저장 사이의
//!   경쟁 조건은 이 인덱스가 막으며, 중복 키 에러(11000)는 `EmailConflict`로 변환됩니다.
//! - `name_asc`: `last_name`, `first_name` 오름차순 (`find_all` 정렬용)

use std::future::Future;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{self, doc},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::users::user_repo::UserRepository;
use crate::utils::string_utils::normalize_email;

const COUNTERS_COLLECTION: &str = "counters";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB에 저장되는 사용자 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
    is_active: bool,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            created_at: to_bson_datetime(user.created_at),
            updated_at: to_bson_datetime(user.updated_at),
            is_active: user.is_active,
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = AppError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document.id,
            first_name: document.first_name,
            last_name: document.last_name,
            email: document.email,
            created_at: to_chrono(document.created_at)?,
            updated_at: to_chrono(document.updated_at)?,
            is_active: document.is_active,
        })
    }
}

/// ID 시퀀스 문서
#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn to_chrono(value: bson::DateTime) -> AppResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).ok_or_else(|| {
        AppError::DatabaseError(format!("표현할 수 없는 날짜 값입니다: {}", value.timestamp_millis()))
    })
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 쓰기 에러 변환. 이메일 유니크 인덱스 위반은 `EmailConflict`가 됩니다.
fn map_write_error(error: MongoError, email: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::EmailConflict(email.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

/// 중복 키 에러로 실패하면 한 번만 다시 실행합니다.
async fn retry_once_on_duplicate_key<T, F, Fut>(mut operation: F) -> Result<T, MongoError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, MongoError>>,
{
    match operation().await {
        Err(error) if is_duplicate_key(&error) => {
            debug!("중복 키 에러 후 재시도: {}", error);
            operation().await
        }
        result => result,
    }
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
    counters: Collection<Counter>,
    collection_name: String,
}

impl MongoUserRepository {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        let db = database.get_database();
        debug!("사용자 컬렉션: {}.{}", database.database_name(), collection_name);

        Self {
            users: db.collection::<UserDocument>(collection_name),
            counters: db.collection::<Counter>(COUNTERS_COLLECTION),
            collection_name: collection_name.to_string(),
        }
    }

    /// 유니크 이메일 인덱스와 정렬용 이름 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "last_name": 1, "first_name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        self.users
            .create_indexes([email_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ '{}' 컬렉션 인덱스 준비 완료", self.collection_name);
        Ok(())
    }

    /// 컬렉션이 비어 있으면 기본 관리자 계정을 추가합니다.
    ///
    /// 추가된 경우 해당 사용자를 반환합니다.
    pub async fn seed_default_admin(&self) -> AppResult<Option<User>> {
        let count = self.users
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if count > 0 {
            return Ok(None);
        }

        let admin = self
            .create(User::new("Admin".to_string(), "User".to_string(), "admin@example.com".to_string()))
            .await?;

        info!("기본 관리자 계정 생성: id={}, email={}", admin.id, admin.email);
        Ok(Some(admin))
    }

    /// `counters` 문서를 원자적으로 증가시켜 다음 ID를 얻습니다.
    ///
    /// 카운터 문서가 없을 때 동시에 실행된 upsert는 한쪽만 문서를 만들고
    /// 나머지는 `counters._id` 중복 키로 실패하므로 한 번 더 증가를 시도합니다.
    async fn next_id(&self) -> AppResult<i64> {
        let counter = retry_once_on_duplicate_key(|| self.increment_counter())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("ID 시퀀스를 가져오지 못했습니다".to_string()))?;

        Ok(counter.seq)
    }

    async fn increment_counter(&self) -> Result<Option<Counter>, MongoError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.counters
            .find_one_and_update(
                doc! { "_id": self.collection_name.as_str() },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let documents: Vec<UserDocument> = self.users
            .find(doc! {})
            .sort(doc! { "last_name": 1, "first_name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documents.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "email": normalize_email(email) })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(User::try_from)
            .transpose()
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        // 저장되는 값과 같은 밀리초 정밀도
        let now = to_chrono(bson::DateTime::now())?;

        user.id = self.next_id().await?;
        user.created_at = now;
        user.updated_at = now;

        self.users
            .insert_one(UserDocument::from(&user))
            .await
            .map_err(|e| map_write_error(e, &user.email))?;

        debug!("MongoDB 사용자 저장: id={}", user.id);
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.users
            .find_one_and_update(
                doc! { "_id": user.id },
                doc! {
                    "$set": {
                        "first_name": user.first_name.as_str(),
                        "last_name": user.last_name.as_str(),
                        "email": user.email.as_str(),
                        "is_active": user.is_active,
                        "updated_at": bson::DateTime::now(),
                    }
                },
            )
            .with_options(options)
            .await
            .map_err(|e| map_write_error(e, &user.email))?
            .ok_or_else(|| AppError::NotFound(format!("ID {}인 사용자를 찾을 수 없습니다", user.id)))?;

        User::try_from(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self.users
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            debug!("MongoDB 사용자 삭제: id={}", id);
        }

        Ok(result.deleted_count > 0)
    }
}
