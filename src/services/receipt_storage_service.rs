//! Almacenamiento de recibos en disco
//!
//! Los recibos se guardan como <uuid>.<ext> bajo el directorio configurado;
//! la base de datos solo conserva la storage_key relativa. Solo se aceptan
//! JPEG y PNG, detectados por magic bytes (el content-type del cliente no
//! se considera fiable).

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tokio::fs;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Formato de imagen aceptado para recibos
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReceiptImageKind {
    Jpeg,
    Png,
}

impl ReceiptImageKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ReceiptImageKind::Jpeg => "jpg",
            ReceiptImageKind::Png => "png",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReceiptImageKind::Jpeg => "image/jpeg",
            ReceiptImageKind::Png => "image/png",
        }
    }
}

/// FF D8 FF (solo cabecera)
pub fn is_jpeg(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[0] == 0xff && bytes[1] == 0xd8 && bytes[2] == 0xff
}

/// 89 50 4E 47 0D 0A 1A 0A
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.len() >= 8 && bytes[..8] == [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]
}

/// Detectar el formato por contenido
pub fn sniff_image(bytes: &[u8]) -> Option<ReceiptImageKind> {
    if is_jpeg(bytes) {
        return Some(ReceiptImageKind::Jpeg);
    }
    if is_png(bytes) {
        return Some(ReceiptImageKind::Png);
    }
    None
}

/// SHA-256 en hex del contenido
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Resultado de guardar un recibo en disco
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    /// Clave relativa que se persiste en la base de datos
    pub storage_key: String,
    pub content_type: &'static str,
    pub sha256: String,
}

/// Guardar los bytes validados en disco bajo receipts_dir
pub async fn store_receipt(receipts_dir: &Path, bytes: &[u8]) -> Result<StoredReceipt, AppError> {
    let kind = sniff_image(bytes)
        .ok_or_else(|| AppError::BadRequest("file must be a JPEG or PNG image".to_string()))?;

    fs::create_dir_all(receipts_dir)
        .await
        .map_err(|e| AppError::Internal(format!("cannot create receipts dir: {}", e)))?;

    let basename = format!("{}.{}", Uuid::new_v4(), kind.extension());
    let full_path = receipts_dir.join(&basename);

    fs::write(&full_path, bytes)
        .await
        .map_err(|e| AppError::Internal(format!("cannot write receipt: {}", e)))?;

    Ok(StoredReceipt {
        storage_key: format!("receipts/{}", basename),
        content_type: kind.content_type(),
        sha256: sha256_hex(bytes),
    })
}

/// Ruta en disco de una storage_key previamente guardada.
/// Se usa solo el basename: una clave manipulada no puede salir del
/// directorio de recibos.
pub fn receipt_path(receipts_dir: &Path, storage_key: &str) -> PathBuf {
    let basename = Path::new(storage_key)
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    receipts_dir.join(basename)
}

/// Leer los bytes de un recibo; None si el fichero ya no existe
pub async fn read_receipt(receipts_dir: &Path, storage_key: &str) -> Result<Option<Vec<u8>>, AppError> {
    let path = receipt_path(receipts_dir, storage_key);
    match fs::read(&path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Internal(format!("cannot read receipt: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JPEG_HEADER: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];
    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00];

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(sniff_image(JPEG_HEADER), Some(ReceiptImageKind::Jpeg));
    }

    #[test]
    fn test_sniff_png() {
        assert_eq!(sniff_image(PNG_HEADER), Some(ReceiptImageKind::Png));
    }

    #[test]
    fn test_sniff_rejects_other_content() {
        assert_eq!(sniff_image(b"GIF89a..."), None);
        assert_eq!(sniff_image(b"%PDF-1.7"), None);
        assert_eq!(sniff_image(&[]), None);
        // cabecera JPEG truncada
        assert_eq!(sniff_image(&[0xff, 0xd8]), None);
    }

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b"test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_receipt_path_ignores_directory_components() {
        let dir = Path::new("/var/fleetfuel/receipts");
        let path = receipt_path(dir, "receipts/../../etc/passwd");
        assert_eq!(path, dir.join("passwd"));

        let normal = receipt_path(dir, "receipts/abc.jpg");
        assert_eq!(normal, dir.join("abc.jpg"));
    }
}
