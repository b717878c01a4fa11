//! File selection validation for the upload drop zone.
//!
//! Candidates from a drop or a picker are checked against an [`UploadPolicy`]
//! (size limit, optional type allow-list, count cap). Accepted files are
//! appended to the current selection in input order and the result replaces
//! the caller's selection. Every excluded candidate is reported with a
//! [`RejectionReason`].

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::IconName;

/// Default cap on the number of selected files.
pub const DEFAULT_MAX_FILES: usize = 5;
/// Default per-file size limit (5 MiB).
pub const DEFAULT_MAX_SIZE: u64 = 5 * 1024 * 1024;

/// Minimal metadata the selection filter needs from a file handle.
pub trait FileMeta {
    /// File name including extension.
    fn name(&self) -> &str;
    /// Reported MIME type; may be empty when the browser cannot infer one.
    fn mime_type(&self) -> &str;
    /// Size in bytes.
    fn size(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Plain file metadata record.
pub struct CandidateFile {
    /// File name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl CandidateFile {
    /// Builds a metadata record.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

impl FileMeta for CandidateFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn size(&self) -> u64 {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Upload constraints enforced before a file enters the selection.
pub struct UploadPolicy {
    /// Maximum number of files in the selection.
    pub max_files: usize,
    /// Maximum size of a single file in bytes.
    pub max_size: u64,
    /// Accepted type patterns: exact MIME (`application/pdf`), MIME wildcard
    /// (`image/*`) or extension (`.pdf`). `None` accepts any type.
    pub accepted_types: Option<Vec<String>>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_size: DEFAULT_MAX_SIZE,
            accepted_types: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why a candidate was kept out of the selection.
pub enum RejectionReason {
    /// File exceeds the size limit.
    #[error("{} exceeds the {} limit", format_file_size(*size), format_file_size(*max))]
    TooLarge {
        /// File size in bytes.
        size: u64,
        /// Configured limit in bytes.
        max: u64,
    },
    /// File type is not on the allow-list.
    #[error("{} is not accepted", type_label(mime_type))]
    UnsupportedType {
        /// Reported MIME type.
        mime_type: String,
    },
    /// The selection was already full.
    #[error("only {max_files} files allowed")]
    LimitReached {
        /// Configured file cap.
        max_files: usize,
    },
}

fn type_label(mime_type: &str) -> &str {
    if mime_type.is_empty() {
        "unknown file type"
    } else {
        mime_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A candidate excluded from the selection.
pub struct RejectedFile<T> {
    /// The excluded file.
    pub file: T,
    /// Why it was excluded.
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one selection pass.
pub struct SelectionOutcome<T> {
    /// The new selection; replaces the caller's selection.
    pub selection: Vec<T>,
    /// Candidates that were excluded, in input order.
    pub rejected: Vec<RejectedFile<T>>,
}

fn matches_pattern(pattern: &str, file: &impl FileMeta) -> bool {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return false;
    }
    if pattern == "*" || pattern == "*/*" {
        return true;
    }
    if let Some(extension) = pattern.strip_prefix('.') {
        let suffix = format!(".{}", extension.to_ascii_lowercase());
        return file.name().to_ascii_lowercase().ends_with(&suffix);
    }
    let mime_type = file.mime_type().to_ascii_lowercase();
    if let Some(family) = pattern.strip_suffix("/*") {
        return mime_type.starts_with(&format!("{}/", family.to_ascii_lowercase()));
    }
    mime_type == pattern.to_ascii_lowercase()
}

impl UploadPolicy {
    /// Policy with an explicit type allow-list and default limits.
    pub fn accepting<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted_types: Some(types.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Checks size and type for one file; the count cap is applied by [`select_files`].
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint, size before type.
    pub fn check(&self, file: &impl FileMeta) -> Result<(), RejectionReason> {
        if file.size() > self.max_size {
            return Err(RejectionReason::TooLarge {
                size: file.size(),
                max: self.max_size,
            });
        }
        if let Some(types) = &self.accepted_types {
            if !types.iter().any(|pattern| matches_pattern(pattern, file)) {
                return Err(RejectionReason::UnsupportedType {
                    mime_type: file.mime_type().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Value for the native input's `accept` attribute.
    pub fn accept_attribute(&self) -> Option<String> {
        self.accepted_types.as_ref().map(|types| types.join(","))
    }

    /// Whether the native picker should allow multiple files.
    pub fn allows_multiple(&self) -> bool {
        self.max_files > 1
    }

    /// Human readable constraint line shown under the drop zone.
    pub fn summary(&self) -> String {
        let types = match &self.accepted_types {
            Some(types) if !types.is_empty() => types.join(", "),
            _ => "Any file type".to_string(),
        };
        format!("{types} • Max {}", format_file_size(self.max_size))
    }
}

/// Filters `candidates` against `policy` and appends the survivors to `current`.
///
/// The combined list is capped at `policy.max_files`, preferring earlier
/// entries, so the existing selection is kept ahead of new candidates.
/// Existing entries past the cap are reported as rejected too.
pub fn select_files<T, I>(
    current: &[T],
    candidates: I,
    policy: &UploadPolicy,
) -> SelectionOutcome<T>
where
    T: FileMeta + Clone,
    I: IntoIterator<Item = T>,
{
    let mut selection: Vec<T> = current.iter().take(policy.max_files).cloned().collect();
    let mut rejected: Vec<RejectedFile<T>> = current
        .iter()
        .skip(policy.max_files)
        .cloned()
        .map(|file| RejectedFile {
            file,
            reason: RejectionReason::LimitReached {
                max_files: policy.max_files,
            },
        })
        .collect();

    for file in candidates {
        let verdict = policy.check(&file).and_then(|()| {
            if selection.len() >= policy.max_files {
                Err(RejectionReason::LimitReached {
                    max_files: policy.max_files,
                })
            } else {
                Ok(())
            }
        });
        match verdict {
            Ok(()) => selection.push(file),
            Err(reason) => {
                logging::log!("upload rejected `{}`: {reason}", file.name());
                rejected.push(RejectedFile { file, reason });
            }
        }
    }

    SelectionOutcome {
        selection,
        rejected,
    }
}

/// Returns `selection` without the entry at `index`; out-of-range indexes leave it unchanged.
pub fn remove_at<T: Clone>(selection: &[T], index: usize) -> Vec<T> {
    selection
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, file)| file.clone())
        .collect()
}

/// Formats a byte count as `B`, `KB` or `MB` with one decimal above bytes.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Preview category of a selected file.
pub enum FileKind {
    /// Any `image/*` type; previewed as a thumbnail.
    Image,
    /// PDF documents.
    Pdf,
    /// Everything else.
    Other,
}

impl FileKind {
    /// Classifies a MIME type.
    pub fn of(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type.contains("pdf") {
            Self::Pdf
        } else {
            Self::Other
        }
    }

    /// Icon shown when no thumbnail is available.
    pub fn icon(self) -> IconName {
        match self {
            Self::Image => IconName::Image,
            Self::Pdf => IconName::FileText,
            Self::Other => IconName::File,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn file(name: &str, mime_type: &str, size: u64) -> CandidateFile {
        CandidateFile::new(name, mime_type, size)
    }

    fn names(files: &[CandidateFile]) -> Vec<&str> {
        files.iter().map(|file| file.name.as_str()).collect()
    }

    #[test]
    fn accepts_valid_files_in_input_order() {
        let outcome = select_files(
            &[],
            vec![
                file("a.png", "image/png", 10),
                file("b.pdf", "application/pdf", 20),
                file("c.txt", "text/plain", 30),
            ],
            &UploadPolicy::default(),
        );
        assert_eq!(names(&outcome.selection), vec!["a.png", "b.pdf", "c.txt"]);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn oversized_files_are_rejected_with_their_size() {
        let policy = UploadPolicy {
            max_size: 100,
            ..UploadPolicy::default()
        };
        let outcome = select_files(
            &[],
            vec![file("ok.bin", "", 100), file("big.bin", "", 101)],
            &policy,
        );
        assert_eq!(names(&outcome.selection), vec!["ok.bin"]);
        assert_eq!(
            outcome.rejected,
            vec![RejectedFile {
                file: file("big.bin", "", 101),
                reason: RejectionReason::TooLarge { size: 101, max: 100 },
            }]
        );
    }

    #[test]
    fn allow_list_matches_wildcards_exact_types_and_extensions() {
        let policy = UploadPolicy::accepting(["image/*", "application/pdf", ".CSV"]);
        let outcome = select_files(
            &[],
            vec![
                file("photo.jpg", "image/jpeg", 1),
                file("doc.pdf", "application/pdf", 1),
                file("table.csv", "", 1),
                file("notes.txt", "text/plain", 1),
                file("imagefake.bin", "imagex/png", 1),
            ],
            &policy,
        );
        assert_eq!(names(&outcome.selection), vec!["photo.jpg", "doc.pdf", "table.csv"]);
        let reasons: Vec<_> = outcome.rejected.iter().map(|r| r.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                RejectionReason::UnsupportedType {
                    mime_type: "text/plain".to_string()
                },
                RejectionReason::UnsupportedType {
                    mime_type: "imagex/png".to_string()
                },
            ]
        );
    }

    #[test]
    fn cap_prefers_existing_then_earlier_candidates() {
        let policy = UploadPolicy {
            max_files: 3,
            ..UploadPolicy::default()
        };
        let current = vec![file("kept.png", "image/png", 1)];
        let outcome = select_files(
            &current,
            vec![
                file("one.png", "image/png", 1),
                file("two.png", "image/png", 1),
                file("three.png", "image/png", 1),
            ],
            &policy,
        );
        assert_eq!(names(&outcome.selection), vec!["kept.png", "one.png", "two.png"]);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(
            outcome.rejected[0].reason,
            RejectionReason::LimitReached { max_files: 3 }
        );
    }

    #[test]
    fn existing_entries_past_the_cap_are_reported() {
        let policy = UploadPolicy {
            max_files: 1,
            ..UploadPolicy::default()
        };
        let current = vec![file("a.png", "image/png", 1), file("b.png", "image/png", 1)];
        let outcome = select_files(&current, Vec::new(), &policy);
        assert_eq!(names(&outcome.selection), vec!["a.png"]);
        assert_eq!(
            outcome.rejected,
            vec![RejectedFile {
                file: file("b.png", "image/png", 1),
                reason: RejectionReason::LimitReached { max_files: 1 },
            }]
        );
        assert_eq!(
            outcome.selection.len() + outcome.rejected.len(),
            current.len()
        );
    }

    #[test]
    fn size_is_checked_before_the_cap() {
        let policy = UploadPolicy {
            max_files: 1,
            max_size: 10,
            accepted_types: None,
        };
        let outcome = select_files(
            &[file("full.png", "image/png", 1)],
            vec![file("huge.png", "image/png", 11)],
            &policy,
        );
        assert_eq!(
            outcome.rejected[0].reason,
            RejectionReason::TooLarge { size: 11, max: 10 }
        );
    }

    #[test]
    fn retained_files_always_satisfy_the_policy() {
        let policies = [
            UploadPolicy::default(),
            UploadPolicy {
                max_files: 2,
                max_size: 50,
                accepted_types: Some(vec!["image/*".to_string()]),
            },
            UploadPolicy {
                max_files: 0,
                ..UploadPolicy::default()
            },
        ];
        let candidates: Vec<CandidateFile> = (0..12u64)
            .map(|index| {
                let mime_type = if index % 3 == 0 { "text/plain" } else { "image/png" };
                file(&format!("f{index}"), mime_type, index * 10)
            })
            .collect();

        for policy in &policies {
            let outcome = select_files(&[], candidates.clone(), policy);
            assert!(outcome.selection.len() <= policy.max_files);
            assert_eq!(
                outcome.selection.len() + outcome.rejected.len(),
                candidates.len()
            );
            for kept in &outcome.selection {
                assert_eq!(policy.check(kept), Ok(()));
            }
            let positions: Vec<usize> = outcome
                .selection
                .iter()
                .map(|kept| candidates.iter().position(|c| c == kept).expect("from input"))
                .collect();
            assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn remove_at_drops_only_the_indexed_entry() {
        let selection = vec![file("a", "", 1), file("b", "", 1), file("c", "", 1)];
        assert_eq!(names(&remove_at(&selection, 1)), vec!["a", "c"]);
        assert_eq!(names(&remove_at(&selection, 9)), vec!["a", "b", "c"]);
    }

    #[test]
    fn file_sizes_format_per_unit() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(DEFAULT_MAX_SIZE), "5.0 MB");
    }

    #[test]
    fn summary_and_accept_attribute_follow_the_allow_list() {
        assert_eq!(UploadPolicy::default().summary(), "Any file type • Max 5.0 MB");
        assert_eq!(UploadPolicy::default().accept_attribute(), None);
        let policy = UploadPolicy::accepting(["image/*", ".pdf"]);
        assert_eq!(policy.summary(), "image/*, .pdf • Max 5.0 MB");
        assert_eq!(policy.accept_attribute().as_deref(), Some("image/*,.pdf"));
    }

    #[test]
    fn policy_deserializes_with_defaults() {
        let policy: UploadPolicy =
            serde_json::from_str(r#"{"max_files": 2}"#).expect("policy json");
        assert_eq!(
            policy,
            UploadPolicy {
                max_files: 2,
                ..UploadPolicy::default()
            }
        );
    }

    #[test]
    fn rejection_reasons_read_naturally() {
        assert_eq!(
            RejectionReason::TooLarge {
                size: 6 * 1024 * 1024,
                max: DEFAULT_MAX_SIZE
            }
            .to_string(),
            "6.0 MB exceeds the 5.0 MB limit"
        );
        assert_eq!(
            RejectionReason::LimitReached { max_files: 5 }.to_string(),
            "only 5 files allowed"
        );
        assert_eq!(
            RejectionReason::UnsupportedType {
                mime_type: String::new()
            }
            .to_string(),
            "unknown file type is not accepted"
        );
    }

    #[test]
    fn file_kind_picks_preview_icons() {
        assert_eq!(FileKind::of("image/webp"), FileKind::Image);
        assert_eq!(FileKind::of("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::of("text/plain").icon(), IconName::File);
    }
}
