pub mod error;

use serde::{de::DeserializeOwned, Serialize};
use std::{io, path::PathBuf};
use tokio::{fs, sync::Mutex};

/// Names of the persisted blobs. Each one holds a JSON array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    UploadedPdfs,
    ChatHistory,
    QuizProgress,
}

impl Key {
    pub const fn name(self) -> &'static str {
        match self {
            Self::UploadedPdfs => "uploadedPDFs",
            Self::ChatHistory => "chatHistory",
            Self::QuizProgress => "quizProgress",
        }
    }
}

/// Key-value storage of JSON blobs, one file per [`Key`] inside a data directory.
/// Every save replaces the whole blob.
pub struct Database {
    root: PathBuf,
    /// Serializes writers so that temporary files never interleave.
    writer: Mutex<()>,
}

impl Database {
    /// Opens (and creates, if necessary) the data directory.
    pub async fn open(root: impl Into<PathBuf>) -> error::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        log::debug!("Opened data directory {}.", root.display());
        Ok(Self { root, writer: Mutex::new(()) })
    }

    fn path_of(&self, key: Key) -> PathBuf {
        self.root.join(key.name()).with_extension("json")
    }

    /// Reads the blob stored under `key`. Returns `None` if nothing was ever saved.
    pub async fn load<T: DeserializeOwned>(&self, key: Key) -> error::Result<Option<T>> {
        let bytes = match fs::read(self.path_of(key)).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Overwrites the blob stored under `key`.
    pub async fn save<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> error::Result<()> {
        let bytes = serde_json::to_vec(value)?;
        let path = self.path_of(key);
        let staging = path.with_extension("json.tmp");

        let _guard = self.writer.lock().await;
        fs::write(&staging, &bytes).await?;
        fs::rename(&staging, &path).await?;
        log::trace!("Saved {} bytes under {}.", bytes.len(), key.name());
        Ok(())
    }

    /// Deletes the blob stored under `key`. Returns whether it existed.
    pub async fn remove(&self, key: Key) -> error::Result<bool> {
        let _guard = self.writer.lock().await;
        match fs::remove_file(self.path_of(key)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{error::Error, Database, Key};

    #[tokio::test(flavor = "current_thread")]
    async fn database_test() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("nested")).await.unwrap();

        // Nothing saved yet
        assert!(db.load::<Vec<String>>(Key::UploadedPdfs).await.unwrap().is_none());
        assert!(!db.remove(Key::UploadedPdfs).await.unwrap());

        // Wholesale overwrite
        db.save(Key::UploadedPdfs, &["a.pdf", "b.pdf"]).await.unwrap();
        db.save(Key::UploadedPdfs, &["c.pdf"]).await.unwrap();
        let names: Vec<String> = db.load(Key::UploadedPdfs).await.unwrap().unwrap();
        assert_eq!(names, ["c.pdf"]);

        // Keys are independent of each other
        assert!(db.load::<Vec<String>>(Key::QuizProgress).await.unwrap().is_none());

        // Removal
        assert!(db.remove(Key::UploadedPdfs).await.unwrap());
        assert!(db.load::<Vec<String>>(Key::UploadedPdfs).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn blobs_use_key_names() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        db.save(Key::ChatHistory, &Vec::<u8>::new()).await.unwrap();
        assert!(dir.path().join("chatHistory.json").is_file());
        assert!(!dir.path().join("chatHistory.json.tmp").exists());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejects_corrupt_blobs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("quizProgress.json"), b"[{oops").unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        let err = db.load::<Vec<String>>(Key::QuizProgress).await.unwrap_err();
        assert!(matches!(err, Error::Schema));
    }
}
