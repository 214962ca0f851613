use std::error::Error;
use std::f64::consts::PI;
use std::fs::File;
use std::io::{
    BufReader,
    BufWriter
};
use std::path::PathBuf;

use log::warn;

use tabfunc::configuration::Configuration;
use tabfunc::manager::manager::IManager;
use tabfunc::math::function::basic::exp::Exp;
use tabfunc::math::function::basic::log::Log;
use tabfunc::math::function::basic::trigonometric::{
    Cos,
    Sin
};
use tabfunc::math::function::function::Function;
use tabfunc::math::function::functionexpr::FunctionExpr;
use tabfunc::math::function::functions;
use tabfunc::math::function::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfunc::math::function::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfunc::math::function::tabulated::tabulatedfunctioncodec::{
    input_tabulated_function,
    output_tabulated_function,
    read_tabulated_function,
    write_tabulated_function
};
use tabfunc::math::function::tabulated::tabulatedfunction::TabulatedFunction;
use tabfunc::math::function::tabulated::tabulator::tabulate;

const CONFIG_PATH: &str = "json/config.json";

fn grid() -> impl Iterator<Item = f64> {
    (0..).map(|i| i as f64 * 0.1).take_while(|x| *x <= PI)
}

fn output_path(file_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(file_name);
    path
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("\nsin and cos\n");
    for x in grid() {
        println!("sin({:.2}) = {:.6} \t cos({:.2}) = {:.6}", x, Sin.value(x), x, Cos.value(x));
    }

    let tabulated_sin: LinkedListTabulatedFunction = tabulate(&Sin, 0.0, PI, 10)?;
    let tabulated_cos: ArrayTabulatedFunction = tabulate(&Cos, 0.0, PI, 10)?;
    println!("\ntabulated sin and cos\n");
    for x in grid() {
        println!("sin({:.2}) = {:.6} \t cos({:.2}) = {:.6}", x, tabulated_sin.value(x), x, tabulated_cos.value(x));
    }

    println!("\nabsolute error of the tabulated sin and cos\n");
    for x in grid() {
        let sin_error = (tabulated_sin.value(x) - Sin.value(x)).abs();
        let cos_error = (tabulated_cos.value(x) - Cos.value(x)).abs();
        println!("sin error = {:.6} \t cos error = {:.6}", sin_error, cos_error);
    }

    let sum_of_squares = functions::sum(
        functions::power(&tabulated_sin, 2.0),
        functions::power(&tabulated_cos, 2.0)
    );
    println!("\nsin^2 + cos^2\n");
    for x in grid() {
        println!("sin({:.2})^2 + cos({:.2})^2 = {:.6}", x, x, sum_of_squares.value(x));
    }

    let exp: LinkedListTabulatedFunction = tabulate(&Exp, 0.0, 10.0, 11)?;
    let exp_path = output_path("exp.txt");
    {
        let mut writer = BufWriter::new(File::create(&exp_path)?);
        write_tabulated_function(&exp, &mut writer)?;
    }
    let mut reader = BufReader::new(File::open(&exp_path)?);
    let read_exp: LinkedListTabulatedFunction = read_tabulated_function(&mut reader)?;
    println!("\nexp through the text format\n");
    for i in 0..11 {
        let x = i as f64;
        println!("Exp = {:.6} \t TabExp = {:.6}", exp.value(x), read_exp.value(x));
    }

    let ln: ArrayTabulatedFunction = tabulate(&Log::natural(), 1.0, 10.0, 11)?;
    let ln_path = output_path("ln.bin");
    {
        let mut writer = BufWriter::new(File::create(&ln_path)?);
        output_tabulated_function(&ln, &mut writer)?;
    }
    let mut reader = BufReader::new(File::open(&ln_path)?);
    let read_ln: ArrayTabulatedFunction = input_tabulated_function(&mut reader)?;
    println!("\nln through the binary format\n");
    for i in 1..11 {
        let x = i as f64;
        println!("Ln({}) = {:.6} \t TabLn({}) = {:.6}", i, ln.value(x), i, read_ln.value(x));
    }

    let composition: LinkedListTabulatedFunction = tabulate(
        &functions::composition(Exp, Log::natural()), 0.0, 10.0, 11)?;
    let composition_path = output_path("composition.json");
    {
        let writer = BufWriter::new(File::create(&composition_path)?);
        serde_json::to_writer_pretty(writer, &composition)?;
    }
    let reader = BufReader::new(File::open(&composition_path)?);
    let loaded_composition: LinkedListTabulatedFunction = serde_json::from_reader(reader)?;
    println!("\nexp of ln through the structural format\n");
    for i in 0..11 {
        let x = i as f64;
        println!("Exp(Ln({})) = {:.6} \t loaded = {:.6}", i, composition.value(x), loaded_composition.value(x));
    }

    let expression = FunctionExpr::composition(FunctionExpr::Exp, Log::natural().into());
    let expression_json = serde_json::to_string(&expression)?;
    let loaded_expression: FunctionExpr = serde_json::from_str(&expression_json)?;
    println!("\n{}\nexp(ln(5)) = {:.6}", expression_json, loaded_expression.value(5.0));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_PATH.to_owned());
    let config = Configuration::new();
    match config.from_reader(&config_path) {
        Ok(()) => {
            let manager = config.tabulated_function_manager();
            for name in manager.names() {
                let function = manager.get(&name)?;
                println!("\n{}: [{}, {}], {} points", name,
                         function.left_domain_border(), function.right_domain_border(), function.points_count());
            }
        },
        Err(error) => warn!("configuration '{}' not loaded: {}", config_path, error)
    }

    println!("\n{}", tabulated_sin);
    Ok(())
}
