use gridplot::grid::Grid;
use gridplot::storage::{self, DATASET_NAME};
use gridplot::GridplotError;
use ndarray::Array2;
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.nc");

    let mut grid = Grid::new(3, 5);
    grid.edit(0, 1, "1").unwrap();
    grid.edit(1, 0, "4").unwrap();
    grid.set(2, 4, "-2.5").unwrap();

    storage::save_grid(&path, &grid).unwrap();
    let loaded = storage::load_grid(&path).unwrap();

    assert_eq!(loaded.rows(), 3);
    assert_eq!(loaded.cols(), 5);
    assert_eq!(loaded.to_array().unwrap(), grid.to_array().unwrap());
    assert_eq!(loaded.get(0, 2), Some("0.8414709848078965"));
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.nc");

    storage::save_grid(&path, &Grid::new(4, 5)).unwrap();
    storage::save_grid(&path, &Grid::new(2, 5)).unwrap();

    assert_eq!(storage::load_grid(&path).unwrap().rows(), 2);
}

#[test]
fn save_with_non_numeric_cell_fails_before_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.nc");

    let mut grid = Grid::new(2, 5);
    grid.set(1, 1, "hello").unwrap();

    let err = storage::save_grid(&path, &grid).unwrap_err();
    assert!(matches!(err, GridplotError::Parse { row: 1, col: 1, .. }));
    assert!(!path.exists());
}

#[test]
fn empty_cells_block_saving() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.nc");

    let mut grid = Grid::new(1, 5);
    grid.resize(2);

    assert!(matches!(
        storage::save_grid(&path, &grid),
        Err(GridplotError::Parse { row: 1, col: 0, .. })
    ));
}

#[test]
fn load_adopts_stored_column_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.nc");

    let data = Array2::from_shape_fn((2, 7), |(r, c)| (r * 10 + c) as f64);
    storage::write_array(&path, &data).unwrap();

    let grid = storage::load_grid(&path).unwrap();
    assert_eq!(grid.cols(), 7);
    assert_eq!(grid.headers().last().map(String::as_str), Some("Column 7"));
    assert_eq!(grid.get(1, 6), Some("16"));
}

#[test]
fn load_widens_integer_arrays() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ints.nc");

    {
        let mut file = netcdf::create(&path).unwrap();
        file.add_dimension("y", 2).unwrap();
        file.add_dimension("x", 3).unwrap();
        let mut var = file.add_variable::<i32>(DATASET_NAME, &["y", "x"]).unwrap();
        var.put_values(&[1i32, 2, 3, 4, 5, 6][..], ..).unwrap();
    }

    let grid = storage::load_grid(&path).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.column_values(2).unwrap(), vec![3.0, 6.0]);
}

#[test]
fn load_without_data_array_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("other.nc");

    {
        let mut file = netcdf::create(&path).unwrap();
        file.add_dimension("n", 2).unwrap();
        let mut var = file.add_variable::<f64>("temperature", &["n"]).unwrap();
        var.put_values(&[1.0f64, 2.0][..], ..).unwrap();
    }

    assert!(matches!(
        storage::load_grid(&path),
        Err(GridplotError::MissingDataset { .. })
    ));
}

#[test]
fn load_rejects_one_dimensional_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("flat.nc");

    {
        let mut file = netcdf::create(&path).unwrap();
        file.add_dimension("n", 3).unwrap();
        let mut var = file.add_variable::<f64>(DATASET_NAME, &["n"]).unwrap();
        var.put_values(&[1.0f64, 2.0, 3.0][..], ..).unwrap();
    }

    match storage::load_grid(&path) {
        Err(GridplotError::InvalidShape { shape }) => assert_eq!(shape, vec![3]),
        other => panic!("expected InvalidShape, got {:?}", other),
    }
}

#[test]
fn load_missing_file_fails() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        storage::load_grid(&dir.path().join("nope.nc")),
        Err(GridplotError::NetCDF(_))
    ));
}

#[test]
fn array_file_extensions() {
    use std::path::Path;
    assert!(storage::is_array_file(Path::new("a.nc")));
    assert!(storage::is_array_file(Path::new("b.H5")));
    assert!(!storage::is_array_file(Path::new("c.csv")));
    assert!(!storage::is_array_file(Path::new("noext")));
}
