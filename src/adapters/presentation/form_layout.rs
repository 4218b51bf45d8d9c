//! The two table regions of the compliance form.
//!
//! `checklist-table` shows every question with three switches;
//! `requirements-table` shows the traceability grid, one row per
//! requirement. Titles and headers are the form's Spanish labels.

use crate::domain::checklist::{Checklist, ChecklistChoice};
use crate::domain::foundation::RegionId;
use crate::domain::requirements::{RequirementField, RequirementsTable};
use crate::ports::{Cell, ColumnSpec, RegionLayout, RegionSnapshot};

const CHECKLIST_TITLE: &str = "Lista de Chequeo Módulo de Registro de Usuarios";
const REQUIREMENTS_TITLE: &str = "Plantilla de trazabilidad de requisitos";

const CHECKLIST_FILE_STEM: &str = "lista-de-chequeo";
const REQUIREMENTS_FILE_STEM: &str = "plantilla-trazabilidad-requisitos";

/// Lines a multi-line requirement cell shows before it starts growing.
const MULTILINE_MIN_LINES: u32 = 2;

/// Layout of the compliance form's two regions.
#[derive(Debug, Clone, Default)]
pub struct FormLayout;

impl FormLayout {
    pub fn new() -> Self {
        Self
    }

    fn checklist_region(checklist: &Checklist) -> RegionSnapshot {
        let columns = vec![
            ColumnSpec::multi_line("Criterio o Actividad", 520, 1),
            ColumnSpec::single_line("Cumple", 110),
            ColumnSpec::single_line("No cumple", 110),
            ColumnSpec::single_line("No aplica", 110),
        ];

        let rows = checklist
            .entries()
            .iter()
            .map(|entry| {
                let flags = entry.flags();
                let mut row = vec![Cell::text(entry.criteria())];
                row.extend(
                    ChecklistChoice::ALL
                        .iter()
                        .map(|choice| Cell::Toggle(flags.is_on(*choice))),
                );
                row
            })
            .collect();

        RegionSnapshot {
            region: RegionId::checklist(),
            title: CHECKLIST_TITLE.to_string(),
            columns,
            rows,
        }
    }

    fn requirements_region(requirements: &RequirementsTable) -> RegionSnapshot {
        let columns = RequirementField::ALL
            .iter()
            .map(|field| {
                let (header, min_width) = requirement_column(*field);
                if field.is_multiline() {
                    ColumnSpec::multi_line(header, min_width, MULTILINE_MIN_LINES)
                } else {
                    ColumnSpec::single_line(header, min_width)
                }
            })
            .collect();

        let rows = requirements
            .rows()
            .iter()
            .map(|entry| {
                RequirementField::ALL
                    .iter()
                    .map(|field| Cell::text(entry.get(*field)))
                    .collect()
            })
            .collect();

        RegionSnapshot {
            region: RegionId::requirements(),
            title: REQUIREMENTS_TITLE.to_string(),
            columns,
            rows,
        }
    }
}

/// Header label and minimum width (px) of a requirement column.
fn requirement_column(field: RequirementField) -> (&'static str, u32) {
    match field {
        RequirementField::Identifier => ("ID Requerimiento", 100),
        RequirementField::Description => ("Descripción del requerimiento", 200),
        RequirementField::Priority => ("Tipo Prioridad", 100),
        RequirementField::Status => ("Estado actual", 100),
        RequirementField::LastUpdated => ("Última fecha estado registrado", 120),
        RequirementField::AcceptanceCriteria => ("Criterios de aceptación", 200),
        RequirementField::Complexity => ("Nivel de complejidad", 100),
        RequirementField::Deliverables => ("Entregables", 150),
        RequirementField::TestScenarios => ("Escenarios de pruebas", 150),
        RequirementField::Stakeholder => ("Interesado en el requisito", 100),
    }
}

impl RegionLayout for FormLayout {
    fn locate(
        &self,
        region: &RegionId,
        checklist: &Checklist,
        requirements: &RequirementsTable,
    ) -> Option<RegionSnapshot> {
        match region.as_str() {
            RegionId::CHECKLIST => Some(Self::checklist_region(checklist)),
            RegionId::REQUIREMENTS => Some(Self::requirements_region(requirements)),
            _ => None,
        }
    }

    fn regions(&self) -> Vec<RegionId> {
        vec![RegionId::checklist(), RegionId::requirements()]
    }

    fn file_stem(&self, region: &RegionId) -> String {
        match region.as_str() {
            RegionId::CHECKLIST => CHECKLIST_FILE_STEM.to_string(),
            RegionId::REQUIREMENTS => REQUIREMENTS_FILE_STEM.to_string(),
            other => other.to_string(),
        }
    }
}
