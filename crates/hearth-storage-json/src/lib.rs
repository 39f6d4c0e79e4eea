//! Filesystem-backed JSON persistence for households and their backups.
//!
//! One pretty-printed JSON file per household; writes stage through a
//! temporary file and rename. Round-trip fidelity of the full aggregate
//! (records, goals, plans with their enable flags) is the contract.

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

use hearth_core::{
    storage::{HouseholdBackupInfo, HouseholdStorage},
    CoreError,
};
use hearth_domain::Household;

const FILE_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Stores each household under `households/<slug>.json` with timestamped
/// backups under `backups/<slug>/`.
#[derive(Clone)]
pub struct JsonHouseholdStorage {
    households_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonHouseholdStorage {
    pub fn new(households_dir: PathBuf, backups_dir: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(households_dir, backups_dir, DEFAULT_RETENTION)
    }

    pub fn with_retention(
        households_dir: PathBuf,
        backups_dir: PathBuf,
        retention: usize,
    ) -> Result<Self, CoreError> {
        fs::create_dir_all(&households_dir)?;
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            households_dir,
            backups_dir,
            retention: retention.max(1),
        })
    }

    pub fn household_path(&self, name: &str) -> PathBuf {
        self.households_dir
            .join(format!("{}.{}", canonical_name(name), FILE_EXTENSION))
    }

    pub fn backup_path(&self, name: &str, backup: &str) -> PathBuf {
        self.backup_dir(name).join(backup)
    }

    /// Summary rows for every stored household, sorted by name.
    pub fn list_household_metadata(&self) -> Result<Vec<HouseholdMetadata>, CoreError> {
        let mut entries = Vec::new();
        for slug in self.list_households()? {
            let household = self.load_household(&slug)?;
            let path = self.household_path(&slug);
            entries.push(HouseholdMetadata {
                slug: slug.clone(),
                name: household.name.clone(),
                path,
                created_at: household.created_at,
                updated_at: household.updated_at,
                person_count: household.persons.len(),
                expense_count: household.expenses.len(),
                income_count: household.incomes.len(),
                goal_count: household.goals.len(),
                plan_count: household.plans.len(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    pub fn delete_backup(&self, name: &str, backup_id: &str) -> Result<(), CoreError> {
        let path = self.backup_path(name, backup_id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    fn write_backup_file(
        &self,
        household: &Household,
        name: &str,
        note: Option<&str>,
    ) -> Result<HouseholdBackupInfo, CoreError> {
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{}.{}", stem, FILE_EXTENSION);
        let path = dir.join(&file_name);
        write_atomic(&path, &serialize_household(household)?)?;
        self.prune_backups(name)?;
        Ok(HouseholdBackupInfo {
            household: canonical_name(name),
            id: file_name.clone(),
            created_at: timestamp,
            path,
        })
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<(), CoreError> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let file_name = format!("{}_{}.{}", canonical_name(name), timestamp, FILE_EXTENSION);
        let backup_path = dir.join(&file_name);
        fs::copy(path, &backup_path)?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<(), CoreError> {
        let mut entries = self.list_backups(name)?;
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        for entry in entries.into_iter().skip(self.retention) {
            let _ = fs::remove_file(entry.path);
        }
        Ok(())
    }
}

impl HouseholdStorage for JsonHouseholdStorage {
    fn save_household(&self, name: &str, household: &Household) -> Result<(), CoreError> {
        let path = self.household_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            self.backup_existing_file(name, &path)?;
        }
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &serialize_household(household)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_household(&self, name: &str) -> Result<Household, CoreError> {
        load_household_from_path(&self.household_path(name))
    }

    fn list_households(&self) -> Result<Vec<String>, CoreError> {
        if !self.households_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.households_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_household(&self, name: &str) -> Result<(), CoreError> {
        let path = self.household_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_household_to_path(&self, household: &Household, path: &Path) -> Result<(), CoreError> {
        save_household_to_path(household, path)
    }

    fn load_household_from_path(&self, path: &Path) -> Result<Household, CoreError> {
        load_household_from_path(path)
    }

    fn backup_household(
        &self,
        name: &str,
        household: &Household,
        note: Option<&str>,
    ) -> Result<HouseholdBackupInfo, CoreError> {
        self.write_backup_file(household, name, note)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<HouseholdBackupInfo>, CoreError> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        let slug = canonical_name(name);
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(HouseholdBackupInfo {
                    household: slug.clone(),
                    id: file_name.to_string(),
                    created_at: file_name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &HouseholdBackupInfo) -> Result<Household, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let target = self.household_path(&backup.household);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&backup.path, &target)?;
        load_household_from_path(&target)
    }

    fn probe(&self) -> Result<(), CoreError> {
        // A filesystem backend is reachable when its data root is. The
        // result is computed fresh on every call and never cached.
        if self.households_dir.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Storage(format!(
                "data directory `{}` is not accessible",
                self.households_dir.display()
            )))
        }
    }
}

/// Saves a household to an arbitrary path on disk.
pub fn save_household_to_path(household: &Household, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_household(household)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a household snapshot from the provided filesystem path.
pub fn load_household_from_path(path: &Path) -> Result<Household, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Summary row describing one stored household file.
#[derive(Debug, Clone)]
pub struct HouseholdMetadata {
    pub slug: String,
    pub name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub person_count: usize,
    pub expense_count: usize,
    pub income_count: usize,
    pub goal_count: usize,
    pub plan_count: usize,
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "household".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || matches!(ch, '-' | '.'))
            && !sanitized.is_empty()
            && !last_dash
        {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", FILE_EXTENSION))?;
    let mut segments = trimmed.split('_').collect::<Vec<_>>();
    if segments.len() < 2 {
        return None;
    }
    let time = segments.pop()?;
    let date = segments.pop()?;
    if !is_digits(date, 8) || !is_digits(time, 4) {
        return None;
    }
    let raw = format!("{}{}", date, time);
    NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_household(household: &Household) -> Result<String, CoreError> {
    serde_json::to_string_pretty(household).map_err(|err| CoreError::Serde(err.to_string()))
}
