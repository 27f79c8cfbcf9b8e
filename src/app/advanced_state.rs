//! The advanced replicator: every replicator document option, plus filter
//! functions discovered on the source database.

use crate::domain::{EndpointType, ReplicationJob};
use crate::form::{FieldKind, step};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOption {
    ProxyUrl(String),
    StartingSequence(String),
    FilterFunction(String),
    QueryParameters(String),
    UseCheckpoints(bool),
    CheckpointInterval(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOption {
    Continuous(bool),
    CreateTarget(bool),
    DocumentId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvancedField {
    #[default]
    SourceType,
    SourceDatabase,
    SourcePassword,
    ProxyUrl,
    StartingSequence,
    FilterFunction,
    QueryParameters,
    UseCheckpoints,
    CheckpointInterval,
    TargetType,
    TargetDatabase,
    TargetPassword,
    Continuous,
    CreateTarget,
    DocumentId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedFormState {
    pub job: ReplicationJob,
    pub focused_field: AdvancedField,
}

impl AdvancedFormState {
    pub fn source_type(&self) -> EndpointType {
        self.job.source.endpoint_type
    }

    pub fn target_type(&self) -> EndpointType {
        self.job.target.endpoint_type
    }

    /// The database whose filter functions are listed, if the source is local.
    pub fn local_source(&self) -> Option<&str> {
        let db = self.job.source.database.as_str();
        (self.source_type() == EndpointType::Local && !db.trim().is_empty()).then_some(db)
    }

    pub fn apply_source_option(&mut self, option: SourceOption) {
        let opts = &mut self.job.source.options;
        match option {
            SourceOption::ProxyUrl(v) => opts.proxy_url = v,
            SourceOption::StartingSequence(v) => opts.starting_sequence = v,
            SourceOption::FilterFunction(v) => opts.filter_function = v,
            SourceOption::QueryParameters(v) => opts.query_parameters = v,
            SourceOption::UseCheckpoints(v) => opts.use_checkpoints = v,
            SourceOption::CheckpointInterval(v) => opts.checkpoint_interval = v,
        }
    }

    pub fn apply_target_option(&mut self, option: TargetOption) {
        let opts = &mut self.job.target.options;
        match option {
            TargetOption::Continuous(v) => opts.continuous = v,
            TargetOption::CreateTarget(v) => opts.create_target = v,
            TargetOption::DocumentId(v) => opts.document_id = v,
        }
    }

    pub fn visible_fields(&self) -> Vec<AdvancedField> {
        let mut fields = vec![AdvancedField::SourceType, AdvancedField::SourceDatabase];
        if self.source_type() == EndpointType::Remote {
            fields.push(AdvancedField::SourcePassword);
        }
        fields.extend([
            AdvancedField::ProxyUrl,
            AdvancedField::StartingSequence,
            AdvancedField::FilterFunction,
            AdvancedField::QueryParameters,
            AdvancedField::UseCheckpoints,
        ]);
        if self.job.source.options.use_checkpoints {
            fields.push(AdvancedField::CheckpointInterval);
        }
        fields.extend([AdvancedField::TargetType, AdvancedField::TargetDatabase]);
        if self.target_type() == EndpointType::Remote {
            fields.push(AdvancedField::TargetPassword);
        }
        fields.extend([
            AdvancedField::Continuous,
            AdvancedField::CreateTarget,
            AdvancedField::DocumentId,
        ]);
        fields
    }

    pub fn focus_step(&mut self, forward: bool) {
        if let Some(field) = step(&self.visible_fields(), self.focused_field, forward) {
            self.focused_field = field;
        }
    }

    /// Moves focus back to a visible field after a field disappeared.
    pub fn ensure_focus_visible(&mut self) {
        if !self.visible_fields().contains(&self.focused_field) {
            self.focused_field = match self.focused_field {
                AdvancedField::SourcePassword => AdvancedField::SourceDatabase,
                AdvancedField::CheckpointInterval => AdvancedField::UseCheckpoints,
                AdvancedField::TargetPassword => AdvancedField::TargetDatabase,
                _ => AdvancedField::SourceType,
            };
        }
    }

    pub fn field_kind(&self, field: AdvancedField) -> FieldKind {
        match field {
            AdvancedField::SourceType | AdvancedField::TargetType => FieldKind::Choice,
            AdvancedField::SourceDatabase => match self.source_type() {
                EndpointType::Local => FieldKind::LocalDatabase,
                EndpointType::Remote => FieldKind::Text,
            },
            AdvancedField::TargetDatabase => match self.target_type() {
                EndpointType::Local => FieldKind::LocalDatabase,
                EndpointType::Remote => FieldKind::Text,
            },
            AdvancedField::SourcePassword | AdvancedField::TargetPassword => FieldKind::Secret,
            AdvancedField::FilterFunction => match self.source_type() {
                EndpointType::Local => FieldKind::Choice,
                EndpointType::Remote => FieldKind::Text,
            },
            AdvancedField::UseCheckpoints
            | AdvancedField::Continuous
            | AdvancedField::CreateTarget => FieldKind::Toggle,
            AdvancedField::ProxyUrl
            | AdvancedField::StartingSequence
            | AdvancedField::QueryParameters
            | AdvancedField::CheckpointInterval
            | AdvancedField::DocumentId => FieldKind::Text,
        }
    }

    pub fn field_label(&self, field: AdvancedField) -> &'static str {
        match field {
            AdvancedField::SourceType => "Source Type",
            AdvancedField::SourceDatabase => match self.source_type() {
                EndpointType::Local => "Source Database",
                EndpointType::Remote => "Source URL",
            },
            AdvancedField::SourcePassword => "Source Password",
            AdvancedField::ProxyUrl => "Proxy URL",
            AdvancedField::StartingSequence => "Starting Sequence",
            AdvancedField::FilterFunction => "Filter Function",
            AdvancedField::QueryParameters => "Query Parameters",
            AdvancedField::UseCheckpoints => "Use Checkpoints",
            AdvancedField::CheckpointInterval => "Checkpoint Interval",
            AdvancedField::TargetType => "Target Type",
            AdvancedField::TargetDatabase => match self.target_type() {
                EndpointType::Local => "Target Database",
                EndpointType::Remote => "Target URL",
            },
            AdvancedField::TargetPassword => "Target Password",
            AdvancedField::Continuous => "Continuous",
            AdvancedField::CreateTarget => "Create Target",
            AdvancedField::DocumentId => "Document ID",
        }
    }

    /// Current text of a text-like field, `None` for toggles and type choices.
    pub fn text_value(&self, field: AdvancedField) -> Option<&str> {
        let source = &self.job.source;
        let target = &self.job.target;
        let value = match field {
            AdvancedField::SourceDatabase => &source.database,
            AdvancedField::SourcePassword => &source.password,
            AdvancedField::ProxyUrl => &source.options.proxy_url,
            AdvancedField::StartingSequence => &source.options.starting_sequence,
            AdvancedField::FilterFunction => &source.options.filter_function,
            AdvancedField::QueryParameters => &source.options.query_parameters,
            AdvancedField::CheckpointInterval => &source.options.checkpoint_interval,
            AdvancedField::TargetDatabase => &target.database,
            AdvancedField::TargetPassword => &target.password,
            AdvancedField::DocumentId => &target.options.document_id,
            AdvancedField::SourceType
            | AdvancedField::TargetType
            | AdvancedField::UseCheckpoints
            | AdvancedField::Continuous
            | AdvancedField::CreateTarget => return None,
        };
        Some(value.as_str())
    }

    pub fn flag_value(&self, field: AdvancedField) -> Option<bool> {
        match field {
            AdvancedField::UseCheckpoints => Some(self.job.source.options.use_checkpoints),
            AdvancedField::Continuous => Some(self.job.target.options.continuous),
            AdvancedField::CreateTarget => Some(self.job.target.options.create_target),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_rows_only_for_remote_endpoints() {
        let mut form = AdvancedFormState::default();
        assert!(!form.visible_fields().contains(&AdvancedField::SourcePassword));

        form.job.source.endpoint_type = EndpointType::Remote;
        form.job.target.endpoint_type = EndpointType::Remote;

        let fields = form.visible_fields();
        assert!(fields.contains(&AdvancedField::SourcePassword));
        assert!(fields.contains(&AdvancedField::TargetPassword));
    }

    #[test]
    fn checkpoint_interval_row_follows_toggle() {
        let mut form = AdvancedFormState::default();
        assert!(!form.visible_fields().contains(&AdvancedField::CheckpointInterval));

        form.apply_source_option(SourceOption::UseCheckpoints(true));

        assert!(form.visible_fields().contains(&AdvancedField::CheckpointInterval));
    }

    #[test]
    fn hidden_focus_falls_back_to_neighbour() {
        let mut form = AdvancedFormState::default();
        form.apply_source_option(SourceOption::UseCheckpoints(true));
        form.focused_field = AdvancedField::CheckpointInterval;

        form.apply_source_option(SourceOption::UseCheckpoints(false));
        form.ensure_focus_visible();

        assert_eq!(form.focused_field, AdvancedField::UseCheckpoints);
    }

    #[test]
    fn local_source_requires_name() {
        let mut form = AdvancedFormState::default();
        assert_eq!(form.local_source(), None);

        form.job.source.database = "orders".to_string();
        assert_eq!(form.local_source(), Some("orders"));

        form.job.source.endpoint_type = EndpointType::Remote;
        assert_eq!(form.local_source(), None);
    }

    #[test]
    fn options_write_into_job() {
        let mut form = AdvancedFormState::default();

        form.apply_source_option(SourceOption::ProxyUrl("http://proxy".to_string()));
        form.apply_target_option(TargetOption::Continuous(true));

        assert_eq!(form.text_value(AdvancedField::ProxyUrl), Some("http://proxy"));
        assert_eq!(form.flag_value(AdvancedField::Continuous), Some(true));
    }
}
