//! NetCDF array reader.

use super::DATASET_NAME;
use crate::error::{GridplotError, Result};
use crate::grid::Grid;
use ndarray::{Array2, IxDyn};
use netcdf::types::{FloatType, IntType, NcVariableType};
use netcdf::AttributeValue;
use std::path::Path;

/// Load a grid from the array stored in `path`.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let data = read_array(path)?;
    let grid = Grid::from_array(&data);
    tracing::info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Read the grid variable of a file as a 2-D f64 array.
///
/// CF `scale_factor` / `add_offset` attributes are applied when present.
pub fn read_array(path: &Path) -> Result<Array2<f64>> {
    let file = netcdf::open(path)
        .map_err(|e| GridplotError::NetCDF(format!("Failed to open file: {}", e)))?;

    let var = file
        .variable(DATASET_NAME)
        .ok_or_else(|| GridplotError::missing_dataset(DATASET_NAME, path.to_path_buf()))?;

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    if shape.len() != 2 {
        return Err(GridplotError::InvalidShape { shape });
    }

    let mut data = read_values(&var, &shape)?
        .into_dimensionality::<ndarray::Ix2>()
        .map_err(|_| GridplotError::InvalidShape {
            shape: shape.clone(),
        })?;

    let scale_factor = numeric_attribute(&var, "scale_factor").unwrap_or(1.0);
    let add_offset = numeric_attribute(&var, "add_offset").unwrap_or(0.0);
    if scale_factor != 1.0 || add_offset != 0.0 {
        data.mapv_inplace(|v| v * scale_factor + add_offset);
    }

    Ok(data)
}

fn numeric_attribute(var: &netcdf::Variable<'_>, name: &str) -> Option<f64> {
    match var.attribute(name)?.value().ok()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(v as f64),
        AttributeValue::Int(v) => Some(v as f64),
        AttributeValue::Short(v) => Some(v as f64),
        AttributeValue::Doubles(v) => v.first().copied(),
        AttributeValue::Floats(v) => v.first().map(|&x| x as f64),
        _ => None,
    }
}

fn read_values(var: &netcdf::Variable<'_>, shape: &[usize]) -> Result<ndarray::ArrayD<f64>> {
    let vartype = var.vartype();

    let from_vec = |v: Vec<f64>| -> Result<ndarray::ArrayD<f64>> {
        ndarray::ArrayD::from_shape_vec(IxDyn(shape), v).map_err(|_| {
            GridplotError::InvalidShape {
                shape: shape.to_vec(),
            }
        })
    };

    // Unlimited dimensions of length zero cannot be read back with a full extent.
    if shape.iter().any(|&n| n == 0) {
        return from_vec(Vec::new());
    }

    macro_rules! widen {
        ($t:ty) => {{
            let values: Vec<$t> = var.get_values(..).map_err(|e| {
                GridplotError::NetCDF(format!(
                    "Failed to read {} data: {}",
                    stringify!($t),
                    e
                ))
            })?;
            from_vec(values.into_iter().map(|x| x as f64).collect())
        }};
    }

    match vartype {
        NcVariableType::Float(FloatType::F64) => widen!(f64),
        NcVariableType::Float(FloatType::F32) => widen!(f32),
        NcVariableType::Int(IntType::I64) => widen!(i64),
        NcVariableType::Int(IntType::I32) => widen!(i32),
        NcVariableType::Int(IntType::I16) => widen!(i16),
        NcVariableType::Int(IntType::I8) => widen!(i8),
        NcVariableType::Int(IntType::U64) => widen!(u64),
        NcVariableType::Int(IntType::U32) => widen!(u32),
        NcVariableType::Int(IntType::U16) => widen!(u16),
        NcVariableType::Int(IntType::U8) => widen!(u8),
        other => Err(GridplotError::UnsupportedType(format!("{:?}", other))),
    }
}
