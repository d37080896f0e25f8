use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Прочитать JSON-файл; `Ok(None)`, если файла нет
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Записать значение в JSON-файл, создавая недостающие каталоги
///
/// Запись атомарна: сначала во временный файл рядом, затем rename.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, bytes).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}
