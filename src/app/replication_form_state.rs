//! The simple replicator: pick a source, pick a target, start.

use crate::database_list::DatabaseListState;
use crate::domain::{
    EndpointType, ReplicationJob, ReplicationSource, ReplicationTarget, Session, SourceOptions,
    TargetOptions,
};
use crate::form::{FieldKind, step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Local,
    Remote,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Local => "Local database",
            SourceKind::Remote => "Remote database",
        }
    }

    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        match (current, forward) {
            (None, true) | (Some(SourceKind::Remote), _) => SourceKind::Local,
            (None, false) | (Some(SourceKind::Local), _) => SourceKind::Remote,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    ExistingLocal,
    NewLocal,
    ExistingRemote,
    NewRemote,
}

impl TargetKind {
    const ALL: [TargetKind; 4] = [
        TargetKind::ExistingLocal,
        TargetKind::ExistingRemote,
        TargetKind::NewLocal,
        TargetKind::NewRemote,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TargetKind::ExistingLocal => "Existing local database",
            TargetKind::ExistingRemote => "Existing remote database",
            TargetKind::NewLocal => "New local database",
            TargetKind::NewRemote => "New remote database",
        }
    }

    pub fn is_remote(self) -> bool {
        matches!(self, TargetKind::ExistingRemote | TargetKind::NewRemote)
    }

    pub fn creates_target(self) -> bool {
        matches!(self, TargetKind::NewLocal | TargetKind::NewRemote)
    }

    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        match current {
            None if forward => Self::ALL[0],
            None => Self::ALL[Self::ALL.len() - 1],
            Some(kind) => step(&Self::ALL, kind, forward).unwrap_or(kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplicationType {
    #[default]
    OneTime,
    Continuous,
}

impl ReplicationType {
    pub fn label(self) -> &'static str {
        match self {
            ReplicationType::OneTime => "One time",
            ReplicationType::Continuous => "Continuous",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ReplicationType::OneTime => ReplicationType::Continuous,
            ReplicationType::Continuous => ReplicationType::OneTime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplicationFormField {
    #[default]
    Source,
    SourceDatabase,
    Target,
    TargetDatabase,
    ReplicationType,
    DocumentName,
}

/// Typed replacement for the `(field name, value)` pairs of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplicationFormUpdate {
    Source(Option<SourceKind>),
    SourceDatabase(String),
    RemoteSource(String),
    Target(Option<TargetKind>),
    TargetDatabase(String),
    RemoteTarget(String),
    ReplicationType(ReplicationType),
    DocumentName(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationFormState {
    pub source: Option<SourceKind>,
    pub source_database: String,
    pub remote_source: String,
    pub target: Option<TargetKind>,
    pub target_database: String,
    pub remote_target: String,
    pub replication_type: ReplicationType,
    pub document_name: String,
    pub focused_field: ReplicationFormField,
}

impl ReplicationFormState {
    pub fn apply(&mut self, update: ReplicationFormUpdate) {
        match update {
            ReplicationFormUpdate::Source(kind) => self.source = kind,
            ReplicationFormUpdate::SourceDatabase(v) => self.source_database = v,
            ReplicationFormUpdate::RemoteSource(v) => self.remote_source = v,
            ReplicationFormUpdate::Target(kind) => self.target = kind,
            ReplicationFormUpdate::TargetDatabase(v) => self.target_database = v,
            ReplicationFormUpdate::RemoteTarget(v) => self.remote_target = v,
            ReplicationFormUpdate::ReplicationType(t) => self.replication_type = t,
            ReplicationFormUpdate::DocumentName(v) => self.document_name = v,
        }
    }

    /// Fields shown for the current source/target choices, in tab order.
    pub fn visible_fields(&self) -> Vec<ReplicationFormField> {
        let mut fields = vec![ReplicationFormField::Source];
        if self.source.is_some() {
            fields.push(ReplicationFormField::SourceDatabase);
        }
        fields.push(ReplicationFormField::Target);
        if self.target.is_some() {
            fields.push(ReplicationFormField::TargetDatabase);
        }
        fields.push(ReplicationFormField::ReplicationType);
        fields.push(ReplicationFormField::DocumentName);
        fields
    }

    pub fn focus_step(&mut self, forward: bool) {
        if let Some(field) = step(&self.visible_fields(), self.focused_field, forward) {
            self.focused_field = field;
        }
    }

    pub fn field_kind(&self, field: ReplicationFormField) -> FieldKind {
        match field {
            ReplicationFormField::Source
            | ReplicationFormField::Target
            | ReplicationFormField::ReplicationType => FieldKind::Choice,
            ReplicationFormField::SourceDatabase => match self.source {
                Some(SourceKind::Local) => FieldKind::LocalDatabase,
                _ => FieldKind::Text,
            },
            ReplicationFormField::TargetDatabase => match self.target {
                Some(TargetKind::ExistingLocal) => FieldKind::LocalDatabase,
                _ => FieldKind::Text,
            },
            ReplicationFormField::DocumentName => FieldKind::Text,
        }
    }

    pub fn field_label(&self, field: ReplicationFormField) -> &'static str {
        match field {
            ReplicationFormField::Source => "Replication Source",
            ReplicationFormField::SourceDatabase => match self.source {
                Some(SourceKind::Remote) => "Database URL",
                _ => "Source Name",
            },
            ReplicationFormField::Target => "Replication Target",
            ReplicationFormField::TargetDatabase => match self.target {
                Some(kind) if kind.is_remote() => "Database URL",
                Some(TargetKind::NewLocal) => "New Database",
                _ => "Target Name",
            },
            ReplicationFormField::ReplicationType => "Replication Type",
            ReplicationFormField::DocumentName => "Replication Document",
        }
    }

    /// Display value of a field; choice fields render their label.
    pub fn field_value(&self, field: ReplicationFormField) -> &str {
        match field {
            ReplicationFormField::Source => self.source.map_or("", SourceKind::label),
            ReplicationFormField::SourceDatabase => match self.source {
                Some(SourceKind::Remote) => &self.remote_source,
                _ => &self.source_database,
            },
            ReplicationFormField::Target => self.target.map_or("", TargetKind::label),
            ReplicationFormField::TargetDatabase => match self.target {
                Some(kind) if kind.is_remote() => &self.remote_target,
                _ => &self.target_database,
            },
            ReplicationFormField::ReplicationType => self.replication_type.label(),
            ReplicationFormField::DocumentName => &self.document_name,
        }
    }

    /// Update that writes `value` into the text field behind `field`.
    pub fn text_update(&self, field: ReplicationFormField, value: String) -> Option<ReplicationFormUpdate> {
        match field {
            ReplicationFormField::SourceDatabase => Some(match self.source {
                Some(SourceKind::Remote) => ReplicationFormUpdate::RemoteSource(value),
                _ => ReplicationFormUpdate::SourceDatabase(value),
            }),
            ReplicationFormField::TargetDatabase => Some(match self.target {
                Some(kind) if kind.is_remote() => ReplicationFormUpdate::RemoteTarget(value),
                _ => ReplicationFormUpdate::TargetDatabase(value),
            }),
            ReplicationFormField::DocumentName => Some(ReplicationFormUpdate::DocumentName(value)),
            _ => None,
        }
    }

    /// Update for left/right on a choice field.
    pub fn cycle_update(&self, field: ReplicationFormField, forward: bool) -> Option<ReplicationFormUpdate> {
        match field {
            ReplicationFormField::Source => Some(ReplicationFormUpdate::Source(Some(
                SourceKind::cycle(self.source, forward),
            ))),
            ReplicationFormField::Target => Some(ReplicationFormUpdate::Target(Some(
                TargetKind::cycle(self.target, forward),
            ))),
            ReplicationFormField::ReplicationType => Some(ReplicationFormUpdate::ReplicationType(
                self.replication_type.toggled(),
            )),
            _ => None,
        }
    }

    fn source_ready(&self, databases: &DatabaseListState) -> bool {
        match self.source {
            Some(SourceKind::Local) => {
                !self.source_database.trim().is_empty() && databases.contains(&self.source_database)
            }
            Some(SourceKind::Remote) => !self.remote_source.trim().is_empty(),
            None => false,
        }
    }

    fn target_ready(&self, databases: &DatabaseListState) -> bool {
        match self.target {
            Some(TargetKind::ExistingLocal) => {
                !self.target_database.trim().is_empty() && databases.contains(&self.target_database)
            }
            Some(TargetKind::NewLocal) => !self.target_database.trim().is_empty(),
            Some(TargetKind::ExistingRemote | TargetKind::NewRemote) => {
                !self.remote_target.trim().is_empty()
            }
            None => false,
        }
    }

    /// Submit is offered only once both ends are fully described and local
    /// databases that must exist are known.
    pub fn can_submit(&self, databases: &DatabaseListState) -> bool {
        self.source_ready(databases) && self.target_ready(databases)
    }

    pub fn to_job(&self, session: &Session) -> Option<ReplicationJob> {
        let (source_type, source_db) = match self.source? {
            SourceKind::Local => (EndpointType::Local, &self.source_database),
            SourceKind::Remote => (EndpointType::Remote, &self.remote_source),
        };
        let target_kind = self.target?;
        let (target_type, target_db) = if target_kind.is_remote() {
            (EndpointType::Remote, &self.remote_target)
        } else {
            (EndpointType::Local, &self.target_database)
        };
        let password = session.password().to_string();

        Some(ReplicationJob {
            source: ReplicationSource {
                endpoint_type: source_type,
                database: source_db.trim().to_string(),
                password: password.clone(),
                options: SourceOptions::default(),
            },
            target: ReplicationTarget {
                endpoint_type: target_type,
                database: target_db.trim().to_string(),
                password,
                options: TargetOptions {
                    continuous: self.replication_type == ReplicationType::Continuous,
                    create_target: target_kind.creates_target(),
                    document_id: self.document_name.clone(),
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_list::LoadStatus;
    use rstest::rstest;

    fn databases() -> DatabaseListState {
        DatabaseListState {
            names: vec!["orders".to_string(), "users".to_string()],
            status: LoadStatus::Loaded,
        }
    }

    fn local_to_existing_local() -> ReplicationFormState {
        ReplicationFormState {
            source: Some(SourceKind::Local),
            source_database: "orders".to_string(),
            target: Some(TargetKind::ExistingLocal),
            target_database: "users".to_string(),
            ..Default::default()
        }
    }

    mod can_submit {
        use super::*;

        #[test]
        fn complete_local_form_is_submittable() {
            assert!(local_to_existing_local().can_submit(&databases()));
        }

        #[test]
        fn blank_form_is_not_submittable() {
            assert!(!ReplicationFormState::default().can_submit(&databases()));
        }

        #[test]
        fn unknown_local_source_blocks_submit() {
            let mut form = local_to_existing_local();
            form.source_database = "missing".to_string();
            assert!(!form.can_submit(&databases()));
        }

        #[test]
        fn new_local_target_need_not_exist() {
            let mut form = local_to_existing_local();
            form.target = Some(TargetKind::NewLocal);
            form.target_database = "fresh".to_string();
            assert!(form.can_submit(&databases()));
        }

        #[rstest]
        #[case(TargetKind::ExistingRemote)]
        #[case(TargetKind::NewRemote)]
        fn remote_target_needs_url(#[case] kind: TargetKind) {
            let mut form = local_to_existing_local();
            form.target = Some(kind);
            assert!(!form.can_submit(&databases()));

            form.remote_target = "https://backup.example.com/orders".to_string();
            assert!(form.can_submit(&databases()));
        }
    }

    mod to_job {
        use super::*;

        #[test]
        fn maps_new_remote_continuous_target() {
            let mut form = local_to_existing_local();
            form.target = Some(TargetKind::NewRemote);
            form.remote_target = "https://b/orders".to_string();
            form.replication_type = ReplicationType::Continuous;
            form.document_name = "nightly".to_string();
            let session = Session::new(Some("admin".to_string()), Some("pw".to_string()));

            let job = form.to_job(&session).unwrap();

            assert_eq!(job.source.endpoint_type, EndpointType::Local);
            assert_eq!(job.source.database, "orders");
            assert_eq!(job.target.endpoint_type, EndpointType::Remote);
            assert_eq!(job.target.database, "https://b/orders");
            assert!(job.target.options.continuous);
            assert!(job.target.options.create_target);
            assert_eq!(job.target.options.document_id, "nightly");
            assert_eq!(job.source.password, "pw");
            assert_eq!(job.target.password, "pw");
        }

        #[test]
        fn none_without_source_kind() {
            let form = ReplicationFormState::default();
            assert!(form.to_job(&Session::default()).is_none());
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn database_rows_appear_after_kind_chosen() {
            let mut form = ReplicationFormState::default();
            assert!(!form.visible_fields().contains(&ReplicationFormField::SourceDatabase));

            form.apply(ReplicationFormUpdate::Source(Some(SourceKind::Remote)));

            assert!(form.visible_fields().contains(&ReplicationFormField::SourceDatabase));
            assert_eq!(form.field_label(ReplicationFormField::SourceDatabase), "Database URL");
        }

        #[test]
        fn text_update_targets_remote_url_for_remote_kinds() {
            let form = ReplicationFormState {
                target: Some(TargetKind::ExistingRemote),
                ..Default::default()
            };

            let update = form.text_update(ReplicationFormField::TargetDatabase, "x".to_string());

            assert_eq!(update, Some(ReplicationFormUpdate::RemoteTarget("x".to_string())));
        }

        #[test]
        fn target_kind_cycles_through_all_four() {
            let mut kind = None;
            let mut seen = Vec::new();
            for _ in 0..4 {
                let next = TargetKind::cycle(kind, true);
                seen.push(next);
                kind = Some(next);
            }
            assert_eq!(TargetKind::cycle(kind, true), seen[0]);
            assert_eq!(seen.len(), 4);
        }
    }
}
