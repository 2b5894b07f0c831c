use crate::common::*;

use crate::model::snapshot::snapshot::*;

use crate::traits::repository_traits::snapshot_store::*;

use crate::utils_modules::time_utils::*;

pub const SNAPSHOT_FILE_PREFIX: &str = "cnblogs_snapshot_";
pub const SNAPSHOT_FILE_EXT: &str = "json";

#[doc = r#"
    스냅샷 JSON 파일 저장소.

    파일명은 `cnblogs_snapshot_{%Y%m%d_%H%M%S}.json` 형식이며, 타임스탬프가
    0으로 채워져 있으므로 파일명 사전순 정렬이 곧 시간순 정렬이 된다.
    같은 초에 두 번 저장하면 같은 파일명을 덮어쓴다.
"#]
#[derive(Debug, Clone, new)]
pub struct SnapshotStoreImpl {
    data_dir: PathBuf,
}

impl SnapshotStoreImpl {
    fn snapshot_file_path(&self, key: NaiveDateTime) -> PathBuf {
        self.data_dir.join(format!(
            "{}{}.{}",
            SNAPSHOT_FILE_PREFIX,
            format_snapshot_key(key),
            SNAPSHOT_FILE_EXT
        ))
    }
}

#[async_trait]
impl SnapshotStore for SnapshotStoreImpl {
    #[doc = "스냅샷 하나를 타임스탬프 파일명으로 저장하고 저장된 경로를 반환하는 함수"]
    async fn save_snapshot(
        &self,
        fetched_at: DateTime<Utc>,
        snapshot: &Snapshot,
    ) -> Result<PathBuf, anyhow::Error> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let file_path: PathBuf = self.snapshot_file_path(fetched_at.naive_utc());

        let json_text: String = serde_json::to_string_pretty(snapshot).map_err(|e| {
            anyhow!(
                "[SnapshotStoreImpl->save_snapshot] Failed to serialize snapshot: {:?}",
                e
            )
        })?;

        tokio::fs::write(&file_path, json_text).await?;

        info!("Snapshot saved: {:?}", file_path);

        Ok(file_path)
    }

    #[doc = r#"
        데이터 디렉토리에서 스냅샷 파일들을 찾아 저장 키 목록을 오름차순으로 반환하는 함수.

        1. 파일명이 `cnblogs_snapshot_*.json` 패턴에 맞는 일반 파일만 대상으로 한다
        2. 패턴에 맞지만 타임스탬프 파싱에 실패하는 파일은 경고만 남기고 건너뛴다
        3. 데이터 디렉토리 자체가 없으면 빈 목록을 반환한다
    "#]
    async fn list_snapshot_keys(&self) -> Result<Vec<NaiveDateTime>, anyhow::Error> {
        let mut keys: Vec<NaiveDateTime> = Vec::new();

        let mut entries: tokio::fs::ReadDir = match tokio::fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "[SnapshotStoreImpl->list_snapshot_keys] data directory not found: {:?}",
                    self.data_dir
                );
                return Ok(keys);
            }
            Err(e) => return Err(e.into()),
        };

        let file_suffix: String = format!(".{}", SNAPSHOT_FILE_EXT);

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let file_name: String = entry.file_name().to_string_lossy().to_string();

            let key_text: &str = match file_name
                .strip_prefix(SNAPSHOT_FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(file_suffix.as_str()))
            {
                Some(key_text) => key_text,
                None => continue, /* 패턴이 다른 파일은 무시 */
            };

            match parse_snapshot_key(key_text) {
                Ok(key) => keys.push(key),
                Err(e) => {
                    warn!("[SnapshotStoreImpl->list_snapshot_keys] {:?}", e);
                }
            }
        }

        keys.sort();

        Ok(keys)
    }

    #[doc = "저장 키에 해당하는 스냅샷 파일을 읽어 역직렬화하는 함수"]
    async fn load_snapshot(&self, key: NaiveDateTime) -> Result<Snapshot, anyhow::Error> {
        let file_path: PathBuf = self.snapshot_file_path(key);

        let json_text: String = tokio::fs::read_to_string(&file_path).await.map_err(|e| {
            anyhow!(
                "[SnapshotStoreImpl->load_snapshot] Failed to read {:?}: {:?}",
                file_path,
                e
            )
        })?;

        let snapshot: Snapshot = serde_json::from_str(&json_text).map_err(|e| {
            anyhow!(
                "[SnapshotStoreImpl->load_snapshot] Failed to parse {:?}: {:?}",
                file_path,
                e
            )
        })?;

        Ok(snapshot)
    }
}
