use std::{fmt, fs, time::Duration};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use tracing::{debug, error, warn};

use crate::{
    asc::AppStoreConnectClient,
    config::TextSettings,
    deepl::DeeplClient,
    locale::{self, CHANGELOG_LOCALES, DESCRIPTION_LOCALES, LocaleTable},
    model::{App, Localization, Version},
    prompt::{Prompter, SelectionError},
};

/// Which piece of store metadata a run translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Version release notes, the `whatsNew` attribute.
    Changelog,
    Description,
}

impl PipelineKind {
    pub fn section(self) -> &'static str {
        match self {
            PipelineKind::Changelog => "Changelog",
            PipelineKind::Description => "Description",
        }
    }

    pub fn path_key(self) -> &'static str {
        match self {
            PipelineKind::Changelog => "changelog_path",
            PipelineKind::Description => "description_path",
        }
    }

    pub fn language_key(self) -> &'static str {
        match self {
            PipelineKind::Changelog => "changelog_language",
            PipelineKind::Description => "description_language",
        }
    }

    /// The localization attribute the PATCH sets.
    pub fn field(self) -> &'static str {
        match self {
            PipelineKind::Changelog => "whatsNew",
            PipelineKind::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        self.section()
    }

    pub fn locale_table(self) -> &'static LocaleTable {
        match self {
            PipelineKind::Changelog => CHANGELOG_LOCALES,
            PipelineKind::Description => DESCRIPTION_LOCALES,
        }
    }
}

/// Why a run ended before publishing anything. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    NoApps,
    NoVersions,
    NoLocalizations,
    LocalizationsDeclined,
    TextDeclined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Translation(String),
    Publish(StatusCode),
    Transport(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Translation(e) => write!(f, "translation failed: {}", e),
            Failure::Publish(status) => write!(f, "{}", status.as_u16()),
            Failure::Transport(e) => write!(f, "request failed: {}", e),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, Failure)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunReport),
    Stopped(StopReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleResult {
    Updated,
    Skipped,
    Failed(Failure),
}

pub struct Pipeline<'a> {
    kind: PipelineKind,
    asc: &'a AppStoreConnectClient,
    deepl: &'a DeeplClient,
    prompter: &'a dyn Prompter,
    text: &'a TextSettings,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        kind: PipelineKind,
        asc: &'a AppStoreConnectClient,
        deepl: &'a DeeplClient,
        prompter: &'a dyn Prompter,
        text: &'a TextSettings,
    ) -> Self {
        Self {
            kind,
            asc,
            deepl,
            prompter,
            text,
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        println!("=== Apps ===");
        let Some(app) = self.select_app().await? else {
            println!("No apps found");
            return Ok(RunOutcome::Stopped(StopReason::NoApps));
        };

        println!("=== Versions ===");
        let Some(version) = self.select_version(&app).await? else {
            println!("No prerelease versions found");
            return Ok(RunOutcome::Stopped(StopReason::NoVersions));
        };

        println!("=== App Store Version Localizations ===");
        let localizations = {
            let pb = spinner("Loading localizations...");
            let l = self.localizations(&app, &version).await;
            pb.finish_and_clear();
            l
        }?;
        if localizations.is_empty() {
            println!("No localizations found for {}", version.version_string);
            return Ok(RunOutcome::Stopped(StopReason::NoLocalizations));
        }
        println!("Following localizations will be updated:");
        let locales: Vec<&str> = localizations.iter().map(|l| l.locale.as_str()).collect();
        println!("{}", locales.join("  "));
        if !self.prompter.confirm("Continue?")? {
            return Ok(RunOutcome::Stopped(StopReason::LocalizationsDeclined));
        }

        let source = fs::read_to_string(&self.text.path).with_context(|| {
            format!(
                "Failed to read {} file {}",
                self.kind.label().to_lowercase(),
                self.text.path.display()
            )
        })?;
        println!("=== {} ===", self.kind.label());
        println!(
            "{} source language: {}",
            self.kind.label(),
            self.text.language
        );
        println!("{}", source);
        if !self.prompter.confirm("Continue?")? {
            return Ok(RunOutcome::Stopped(StopReason::TextDeclined));
        }

        let mut report = RunReport::default();
        for localization in &localizations {
            let locale = localization.locale.clone();
            match self.process(&source, localization).await {
                LocaleResult::Updated => report.updated.push(locale),
                LocaleResult::Skipped => report.skipped.push(locale),
                LocaleResult::Failed(failure) => report.failed.push((locale, failure)),
            }
        }
        Ok(RunOutcome::Completed(report))
    }

    async fn select_app(&self) -> Result<Option<App>> {
        let apps = {
            let pb = spinner("Loading apps...");
            let a = self.asc.list_apps().await;
            pb.finish_and_clear();
            a
        }?;
        if apps.is_empty() {
            return Ok(None);
        }
        let items: Vec<String> = apps.iter().map(|a| a.name.clone()).collect();
        let idx = self.prompter.select("Select app", &items)?;
        let app = take(apps, idx)?;
        println!("Selected app: {}", app.name);
        debug!(app_id = %app.id, "app selected");
        Ok(Some(app))
    }

    async fn select_version(&self, app: &App) -> Result<Option<Version>> {
        let versions = {
            let pb = spinner("Loading versions...");
            let v = self.asc.list_prerelease_versions(&app.id).await;
            pb.finish_and_clear();
            v
        }?;
        if versions.is_empty() {
            return Ok(None);
        }
        let items: Vec<String> = versions.iter().map(Version::label).collect();
        let idx = self.prompter.select("Select version", &items)?;
        let version = take(versions, idx)?;
        println!("Selected version: {}", version.label());
        debug!(version_id = %version.id, "version selected");
        Ok(Some(version))
    }

    /// Changelog runs read locales from the version listing's `included`
    /// payload; description runs use the version's localization endpoint.
    pub async fn localizations(&self, app: &App, version: &Version) -> Result<Vec<Localization>> {
        match self.kind {
            PipelineKind::Changelog => {
                self.asc
                    .list_included_localizations(
                        &app.id,
                        &version.version_string,
                        &version.platform,
                    )
                    .await
            }
            PipelineKind::Description => self.asc.list_version_localizations(&version.id).await,
        }
    }

    /// Translates `source` for one localization. `Ok(None)` means the locale
    /// has no DeepL target and no request was made.
    pub async fn translate_for(
        &self,
        source: &str,
        localization: &Localization,
    ) -> Result<Option<String>> {
        let Some(target) = locale::lookup(self.kind.locale_table(), &localization.locale) else {
            return Ok(None);
        };
        println!(
            "Translating {} from {} to {}...",
            self.kind.label().to_lowercase(),
            self.text.language,
            localization.locale
        );
        let translated = self
            .deepl
            .translate_text(source, &self.text.language, target)
            .await?;
        Ok(Some(translated))
    }

    pub async fn publish(&self, localization: &Localization, text: &str) -> Result<StatusCode> {
        self.asc
            .update_localization(&localization.id, self.kind.field(), text)
            .await
    }

    /// Translate then publish one locale. Never fails the run.
    pub async fn process(&self, source: &str, localization: &Localization) -> LocaleResult {
        let locale = &localization.locale;
        let noun = self.kind.label().to_lowercase();
        let translated = match self.translate_for(source, localization).await {
            Ok(Some(t)) => t,
            Ok(None) => {
                warn!("Language {} not supported by DeepL, skipping", locale);
                return LocaleResult::Skipped;
            }
            Err(e) => {
                let failure = Failure::Translation(format!("{:#}", e));
                error!("Error translating {} for {}: {}", noun, locale, failure);
                return LocaleResult::Failed(failure);
            }
        };

        let failure = match self.publish(localization, &translated).await {
            Ok(status) if status == StatusCode::OK => {
                println!("{} for {} updated successfully", self.kind.label(), locale);
                return LocaleResult::Updated;
            }
            Ok(status) => Failure::Publish(status),
            Err(e) => Failure::Transport(format!("{:#}", e)),
        };
        error!("Error updating {} for {}: {}", noun, locale, failure);
        LocaleResult::Failed(failure)
    }
}

fn take<T>(mut items: Vec<T>, index: usize) -> Result<T> {
    let len = items.len();
    if index >= len {
        return Err(SelectionError::OutOfRange { index, len }.into());
    }
    Ok(items.swap_remove(index))
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb
}
