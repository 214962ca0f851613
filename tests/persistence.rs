use std::fs::File;
use std::io::{
    BufReader,
    BufWriter,
    Cursor,
    ErrorKind
};
use std::path::PathBuf;

use tabfunc::math::function::basic::exp::Exp;
use tabfunc::math::function::basic::log::Log;
use tabfunc::math::function::basic::trigonometric::Sin;
use tabfunc::math::function::function::Function;
use tabfunc::math::function::functions;
use tabfunc::math::function::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfunc::math::function::tabulated::functionpoint::FunctionPoint;
use tabfunc::math::function::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfunc::math::function::tabulated::tabulatedfunction::TabulatedFunction;
use tabfunc::math::function::tabulated::tabulatedfunctioncodec::{
    input_tabulated_function,
    output_tabulated_function,
    read_tabulated_function,
    write_tabulated_function
};
use tabfunc::math::function::tabulated::tabulatedfunctionerror::TabulatedFunctionError;
use tabfunc::math::function::tabulated::tabulator::tabulate;

fn scratch_path(file_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("tabfunc-{}-{}", std::process::id(), file_name));
    path
}

fn binary_bytes<F: TabulatedFunction + ?Sized>(function: &F) -> Vec<u8> {
    let mut bytes = Vec::new();
    output_tabulated_function(function, &mut bytes).unwrap();
    bytes
}

fn text_bytes<F: TabulatedFunction + ?Sized>(function: &F) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_tabulated_function(function, &mut bytes).unwrap();
    bytes
}

#[test]
fn binary_round_trip_preserves_every_bit() {
    let original: LinkedListTabulatedFunction = tabulate(&Sin, -3.0, 3.0, 17).unwrap();
    let bytes = binary_bytes(&original);
    assert_eq!(bytes.len(), 4 + 17 * 16);

    let restored: LinkedListTabulatedFunction = input_tabulated_function(&mut Cursor::new(&bytes)).unwrap();
    assert_eq!(restored.points(), original.points());
    for k in 0..=60 {
        let x = -3.0 + k as f64 * 0.1;
        assert_eq!(restored.value(x).to_bits(), original.value(x).to_bits());
    }
}

#[test]
fn text_round_trip_preserves_every_bit() {
    let original: ArrayTabulatedFunction = tabulate(&Log::natural(), 0.5, 9.5, 13).unwrap();
    let restored: ArrayTabulatedFunction = read_tabulated_function(&mut Cursor::new(text_bytes(&original))).unwrap();
    assert_eq!(restored.points(), original.points());
}

#[test]
fn formats_are_interchangeable_between_representations() {
    let linked: LinkedListTabulatedFunction = tabulate(&Exp, 0.0, 2.0, 5).unwrap();

    let as_array: ArrayTabulatedFunction = input_tabulated_function(&mut Cursor::new(binary_bytes(&linked))).unwrap();
    assert_eq!(as_array.points(), linked.points());

    let back: LinkedListTabulatedFunction = read_tabulated_function(&mut Cursor::new(text_bytes(&as_array))).unwrap();
    assert_eq!(back, linked);
}

#[test]
fn structural_round_trip_through_json() {
    let mut original = LinkedListTabulatedFunction::with_values(1.0, 4.0, &[2.0, -1.0, 0.5, 8.0]).unwrap();
    original.delete_point(1).unwrap();
    original.add_point(FunctionPoint::new(10.0, 3.0)).unwrap();

    let json = serde_json::to_string(&original).unwrap();
    let restored: LinkedListTabulatedFunction = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);

    let as_array: ArrayTabulatedFunction = serde_json::from_str(&json).unwrap();
    assert_eq!(as_array.points(), original.points());
}

#[test]
fn structural_form_rejects_inconsistent_documents() {
    let wrong_count = r#"{"count": 3, "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]}"#;
    assert!(serde_json::from_str::<LinkedListTabulatedFunction>(wrong_count).is_err());

    let unordered = r#"{"count": 2, "points": [{"x": 1.0, "y": 0.0}, {"x": 0.0, "y": 1.0}]}"#;
    assert!(serde_json::from_str::<ArrayTabulatedFunction>(unordered).is_err());
}

#[test]
fn truncated_binary_stream_is_unexpected_eof() {
    let original = LinkedListTabulatedFunction::with_points_count(0.0, 1.0, 3).unwrap();
    let bytes = binary_bytes(&original);

    for len in [0, 3, 4 + 8, bytes.len() - 1] {
        let result: Result<LinkedListTabulatedFunction, _> = input_tabulated_function(&mut Cursor::new(&bytes[..len]));
        match result {
            Err(TabulatedFunctionError::IoFailure(error)) => assert_eq!(error.kind(), ErrorKind::UnexpectedEof),
            other => panic!("length {}: unexpected {:?}", len, other.map(|f| f.points_count()))
        }
    }
}

#[test]
fn unordered_text_is_invalid_data() {
    let text = "3\n0 1\n2 1\n1 1\n";
    let result: Result<ArrayTabulatedFunction, _> = read_tabulated_function(&mut Cursor::new(text));
    match result {
        Err(TabulatedFunctionError::IoFailure(error)) => assert_eq!(error.kind(), ErrorKind::InvalidData),
        other => panic!("unexpected {:?}", other.map(|f| f.points_count()))
    }
}

#[test]
fn files_round_trip_in_both_formats() {
    let composition: LinkedListTabulatedFunction = tabulate(
        &functions::composition(Exp, Log::natural()), 1.0, 10.0, 10).unwrap();

    let binary_path = scratch_path("composition.bin");
    {
        let mut writer = BufWriter::new(File::create(&binary_path).unwrap());
        output_tabulated_function(&composition, &mut writer).unwrap();
    }
    let from_binary: LinkedListTabulatedFunction =
        input_tabulated_function(&mut BufReader::new(File::open(&binary_path).unwrap())).unwrap();

    let text_path = scratch_path("composition.txt");
    {
        let mut writer = BufWriter::new(File::create(&text_path).unwrap());
        write_tabulated_function(&composition, &mut writer).unwrap();
    }
    let from_text: ArrayTabulatedFunction =
        read_tabulated_function(&mut BufReader::new(File::open(&text_path).unwrap())).unwrap();

    std::fs::remove_file(&binary_path).unwrap();
    std::fs::remove_file(&text_path).unwrap();

    assert_eq!(from_binary, composition);
    assert_eq!(from_text.points(), composition.points());
    for i in 1..=10 {
        let x = i as f64;
        assert!((from_text.value(x) - x).abs() < 1e-9);
    }
}

#[test]
fn text_records_share_one_file() {
    let sin: LinkedListTabulatedFunction = tabulate(&Sin, 0.0, 3.0, 7).unwrap();
    let exp: ArrayTabulatedFunction = tabulate(&Exp, -1.0, 1.0, 5).unwrap();

    let path = scratch_path("records.txt");
    {
        let mut writer = BufWriter::new(File::create(&path).unwrap());
        write_tabulated_function(&sin, &mut writer).unwrap();
        write_tabulated_function(&exp, &mut writer).unwrap();
    }
    let mut reader = BufReader::new(File::open(&path).unwrap());
    let first: LinkedListTabulatedFunction = read_tabulated_function(&mut reader).unwrap();
    let second: ArrayTabulatedFunction = read_tabulated_function(&mut reader).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(first, sin);
    assert_eq!(second, exp);
}
