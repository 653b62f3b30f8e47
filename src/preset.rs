//! Named Argon2id cost presets.
//!
//! The table is closed: blobs carry no preset identifier, so changing a name
//! or a parameter here makes existing ciphertexts undecryptable.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::{CipherError, Result};

/// Argon2id cost parameters under a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityPreset {
    name: Cow<'static, str>,
    label: Cow<'static, str>,
    time_cost: u32,
    mem_cost_kib: u32,
    parallelism: u8,
}

static PRESETS: [SecurityPreset; 3] = [
    SecurityPreset::builtin("High", "High (Max Security)", 3, 1024 * 1024, 4), // 1 GiB
    SecurityPreset::builtin("Medium", "Medium (Balanced)", 3, 64 * 1024, 4), // 64 MiB
    SecurityPreset::builtin("Low", "Low (Fast)", 2, 19 * 1024, 1), // 19 MiB
];

/// Looks up a built-in preset by exact name.
pub fn resolve(name: &str) -> Result<&'static SecurityPreset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| CipherError::UnknownPreset {
            name: name.to_string(),
            expected: PRESETS
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// All built-in presets, strongest first.
pub fn all() -> &'static [SecurityPreset] {
    &PRESETS
}

impl SecurityPreset {
    const fn builtin(
        name: &'static str,
        label: &'static str,
        time_cost: u32,
        mem_cost_kib: u32,
        parallelism: u8,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            label: Cow::Borrowed(label),
            time_cost,
            mem_cost_kib,
            parallelism,
        }
    }

    /// Builds a custom preset, rejecting parameters Argon2 cannot run with.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        time_cost: u32,
        mem_cost_kib: u32,
        parallelism: u8,
    ) -> Result<Self> {
        let name = name.into();
        let preset = Self {
            label: name.clone(),
            name,
            time_cost,
            mem_cost_kib,
            parallelism,
        };
        preset.validate()?;
        Ok(preset)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn time_cost(&self) -> u32 {
        self.time_cost
    }

    pub fn mem_cost_kib(&self) -> u32 {
        self.mem_cost_kib
    }

    pub fn parallelism(&self) -> u8 {
        self.parallelism
    }

    pub fn validate(&self) -> Result<()> {
        if self.time_cost < 1 {
            return Err(CipherError::InvalidPreset(
                "argon2 time cost must be >= 1".into(),
            ));
        }
        if self.mem_cost_kib < 1 {
            return Err(CipherError::InvalidPreset(
                "argon2 memory cost must be >= 1".into(),
            ));
        }
        if self.parallelism < 1 {
            return Err(CipherError::InvalidPreset(
                "argon2 parallelism must be >= 1".into(),
            ));
        }
        if self.mem_cost_kib < 8 * u32::from(self.parallelism) {
            return Err(CipherError::InvalidPreset(
                "argon2 memory cost must be at least 8 * parallelism".into(),
            ));
        }
        Ok(())
    }
}
