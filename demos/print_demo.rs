use linalg_core::{AugmentedMatrix, LinalgError, Matrix, Vector};

fn main() -> Result<(), LinalgError> {
    env_logger::init();

    let v = Vector::new(vec![3, 4]);
    let w = Vector::new(vec![1, -2]);
    println!("{v}");
    println!("|v| = {}", v.magnitude());
    println!("v + w = {}", v.add(&w)?);
    println!("cos(v, w) = {}", v.cosine_similarity(&w)?);

    let a = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    println!("{a}");
    println!("{}", a.transpose());
    println!("A x = {}", a.apply_to_vector(&Vector::new(vec![1, 0, -1]))?);

    let b = Vector::new(vec![7, 8]);
    let ab = AugmentedMatrix::new(&a, &b)?;
    println!("{ab}");

    if let Err(e) = a.dot(&a) {
        println!("A A: {e}");
    }
    Ok(())
}
