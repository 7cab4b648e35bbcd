//! # Banner State Module
//!
//! This module contains the flash banner queue: validation errors, success
//! confirmations and warnings shown at the top of the page, each dismissed
//! automatically after a fixed lifetime.
//!
//! ## Responsibilities:
//! - Hold the currently visible banners in display order
//! - Replace the previous validation batch when a new submit fails
//! - Expire banners after their lifetime and report the next expiry
//!
//! ## Purpose:
//! The coordinator sweeps this queue every frame and schedules a repaint for
//! the next expiry, so banners disappear on time even when the user is idle.

use std::time::{Duration, Instant};

use shared::SubmitError;

/// Visual flavor of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
    Warning,
    Info,
}

/// One visible flash message
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,

    /// When the banner appeared; it expires one lifetime later
    pub raised_at: Instant,

    /// Whether this banner belongs to the current validation batch
    pub validation: bool,
}

/// Queue of visible banners with automatic expiry
#[derive(Debug, Clone)]
pub struct BannerState {
    banners: Vec<Banner>,
    lifetime: Duration,
}

impl BannerState {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            banners: Vec::new(),
            lifetime,
        }
    }

    /// Currently visible banners, oldest first
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    /// Append a banner raised now
    pub fn push(&mut self, kind: BannerKind, message: impl Into<String>, validation: bool) {
        let message = message.into();
        log::debug!("🔔 Banner raised ({:?}): {}", kind, message);
        self.banners.push(Banner {
            kind,
            message,
            raised_at: Instant::now(),
            validation,
        });
    }

    /// Show a success confirmation
    pub fn flash_success(&mut self, message: impl Into<String>) {
        self.push(BannerKind::Success, message, false);
    }

    /// Show a standalone error, outside any validation batch
    pub fn flash_danger(&mut self, message: impl Into<String>) {
        self.push(BannerKind::Danger, message, false);
    }

    /// Replace the previous validation batch with the given errors. Banners
    /// raised outside validation are left untouched.
    pub fn show_validation_errors(&mut self, errors: &[SubmitError]) {
        self.banners.retain(|banner| !banner.validation);

        let raised_at = Instant::now();
        for error in errors {
            self.banners.push(Banner {
                kind: BannerKind::Danger,
                message: error.to_string(),
                raised_at,
                validation: true,
            });
        }
    }

    /// Remove the banner at `index`, if still present
    pub fn dismiss(&mut self, index: usize) {
        if index < self.banners.len() {
            self.banners.remove(index);
        }
    }

    /// Drop every banner older than the lifetime
    pub fn sweep(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.banners
            .retain(|banner| now.duration_since(banner.raised_at) < lifetime);
    }

    /// Time until the next banner expires, if any are visible
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.banners
            .iter()
            .map(|banner| {
                let age = now.duration_since(banner.raised_at);
                self.lifetime.saturating_sub(age)
            })
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_banners() -> BannerState {
        BannerState::new(Duration::from_secs(5))
    }

    #[test]
    fn test_flash_success_is_not_a_validation_banner() {
        let mut banners = create_test_banners();
        banners.flash_success("Activité ajoutée avec succès !");

        assert_eq!(banners.banners().len(), 1);
        assert_eq!(banners.banners()[0].kind, BannerKind::Success);
        assert!(!banners.banners()[0].validation);
    }

    #[test]
    fn test_validation_batch_replaces_previous_batch() {
        let mut banners = create_test_banners();
        banners.show_validation_errors(&[
            SubmitError::MissingCategory,
            SubmitError::MissingActivity,
        ]);
        assert_eq!(banners.banners().len(), 2);

        banners.show_validation_errors(&[SubmitError::InvalidQuantity]);

        assert_eq!(banners.banners().len(), 1);
        assert_eq!(
            banners.banners()[0].message,
            "Veuillez saisir une quantité valide (supérieure à zéro)."
        );
    }

    #[test]
    fn test_validation_batch_keeps_other_banners() {
        let mut banners = create_test_banners();
        banners.flash_success("ok");
        banners.show_validation_errors(&[SubmitError::MissingDate]);

        banners.show_validation_errors(&[SubmitError::MissingCategory]);

        let kinds: Vec<BannerKind> = banners.banners().iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BannerKind::Success, BannerKind::Danger]);
        assert_eq!(banners.banners()[1].message, "Veuillez sélectionner une catégorie.");
    }

    #[test]
    fn test_sweep_expires_old_banners() {
        let mut banners = create_test_banners();
        banners.flash_success("ok");
        let raised = banners.banners()[0].raised_at;

        banners.sweep(raised + Duration::from_secs(4));
        assert_eq!(banners.banners().len(), 1);

        banners.sweep(raised + Duration::from_secs(6));
        assert!(banners.banners().is_empty());
    }

    #[test]
    fn test_dismiss_removes_one_banner() {
        let mut banners = create_test_banners();
        banners.flash_success("un");
        banners.flash_danger("deux");

        banners.dismiss(0);

        assert_eq!(banners.banners().len(), 1);
        assert_eq!(banners.banners()[0].message, "deux");

        // Out-of-range index is a no-op
        banners.dismiss(7);
        assert_eq!(banners.banners().len(), 1);
    }

    #[test]
    fn test_next_deadline_tracks_oldest_banner() {
        let mut banners = create_test_banners();
        assert!(banners.next_deadline(Instant::now()).is_none());

        banners.flash_success("ok");
        let raised = banners.banners()[0].raised_at;

        let deadline = banners.next_deadline(raised + Duration::from_secs(3));
        assert_eq!(deadline, Some(Duration::from_secs(2)));
    }
}
