use anyhow::{Context, Result};
use log::LevelFilter;

use lac_linalg::{
    angle_between, cross_product, determinant, dot_product, identity_matrix, inverse, magnitude,
    normalize, ones_matrix, transpose, zeros_matrix, DeterminantMethod, KernelConfig, Matrix,
    Vector,
};

fn vectors() -> Result<()> {
    println!("=== Vectors ===");
    let v1 = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let v2 = Vector::from_vec(vec![4.0, 5.0, 6.0]);

    println!("v1 = {}", v1);
    println!("v2 = {}", v2);
    println!("v1 + v2 = {}", v1.add(&v2)?);
    println!("v1 - v2 = {}", v1.subtract(&v2)?);
    println!("v1 * 2 = {}", &v1 * 2.0);
    println!("v1 / 2 = {}", v1.divide(2.0)?);

    println!("|v1| = {}", v1.magnitude());
    println!("unit(v1) = {}", v1.unit_vector()?);
    println!("v1 . v2 = {}", v1.dot(&v2)?);
    println!("v1 x v2 = {}", v1.cross(&v2)?);
    println!("angle(v1, v2) = {} rad", v1.angle_with(&v2)?);

    println!("dot_product = {}", dot_product(&v1, &v2)?);
    println!("magnitude = {}", magnitude(&v1));
    println!("normalize = {}", normalize(&v1)?);
    println!("cross_product = {}", cross_product(&v1, &v2)?);
    println!("angle_between = {}", angle_between(&v1, &v2)?);
    Ok(())
}

fn matrices() -> Result<()> {
    println!("\n=== Matrices ===");
    let m1 = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let m2 = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
    let v = Vector::from_vec(vec![1.0, 2.0]);

    println!("m1 = {}", m1);
    println!("m2 = {}", m2);
    println!("shape(m1) = {:?}", m1.shape());
    println!("m1 + m2 = {}", m1.add(&m2)?);
    println!("m1 - m2 = {}", m1.subtract(&m2)?);
    println!("m1 * 2 = {}", &m1 * 2.0);
    println!("m1^T = {}", transpose(&m1));
    println!("trace(m1) = {}", m1.trace()?);
    println!("det(m1) = {}", determinant(&m1)?);
    println!("m1 is square: {}", m1.is_square());
    println!("m1 * v = {}", m1.mul_vector(&v)?);
    println!("m1 * m2 = {}", m1.mul_matrix(&m2)?);
    println!("inverse(m1) = {}", inverse(&m1)?);

    let lu = KernelConfig::new(1e-12, DeterminantMethod::Lu);
    let big = Matrix::from_rows(vec![
        vec![2.0, -3.0, 1.0],
        vec![2.0, 0.0, -1.0],
        vec![1.0, 4.0, 5.0],
    ])?;
    println!("det(big) via LU = {}", big.determinant_with(&lu)?);
    Ok(())
}

fn factories() {
    println!("\n=== Factories ===");
    let id: Matrix = identity_matrix(3);
    let zeros: Matrix = zeros_matrix(2, 3);
    let ones: Matrix = ones_matrix(3, 2);
    println!("identity(3) = {}", id);
    println!("zeros(2, 3) = {}", zeros);
    println!("ones(3, 2) = {}", ones);
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("LAC_LOG", "warn"))
        .init();

    vectors().context("vector examples failed")?;
    matrices().context("matrix examples failed")?;
    factories();
    Ok(())
}
