//! Record dump formats

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use drawlist_core::{as_bytes, PackedRecord};
use serde::Serialize;

/// How `pack` writes its records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One human-readable line per record
    #[default]
    Text,
    /// JSON array of record objects
    Json,
    /// The GPU buffer bytes, little-endian, fixed stride
    Raw,
}

/// JSON view of a [`PackedRecord`]
#[derive(Debug, Serialize)]
struct RecordView {
    command_type: &'static str,
    object_id: i32,
    start: [f32; 2],
    end: [f32; 2],
    third_corner: [f32; 2],
    radius: f32,
    color: [f32; 4],
    thickness: f32,
}

impl From<&PackedRecord> for RecordView {
    fn from(record: &PackedRecord) -> Self {
        Self {
            command_type: type_name(record),
            object_id: record.object_id,
            start: record.start,
            end: record.end,
            third_corner: record.third_corner,
            radius: record.radius,
            color: record.color,
            thickness: record.thickness,
        }
    }
}

fn type_name(record: &PackedRecord) -> &'static str {
    record.kind().map_or("unknown", |kind| kind.name())
}

pub fn write_records(out: &mut impl Write, records: &[PackedRecord], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for (i, r) in records.iter().enumerate() {
                writeln!(
                    out,
                    "{i:>5}  obj {:>3}  {:<13} start ({:.4}, {:.4})  end ({:.4}, {:.4})  \
                     third ({:.4}, {:.4})  radius {:.4}  thickness {:.4}  color [{:.2}, {:.2}, {:.2}, {:.2}]",
                    r.object_id,
                    type_name(r),
                    r.start[0],
                    r.start[1],
                    r.end[0],
                    r.end[1],
                    r.third_corner[0],
                    r.third_corner[1],
                    r.radius,
                    r.thickness,
                    r.color[0],
                    r.color[1],
                    r.color[2],
                    r.color[3],
                )?;
            }
        }
        Format::Json => {
            let views: Vec<RecordView> = records.iter().map(RecordView::from).collect();
            serde_json::to_writer_pretty(&mut *out, &views)?;
            writeln!(out)?;
        }
        Format::Raw => out.write_all(as_bytes(records))?,
    }
    out.flush()?;
    Ok(())
}
