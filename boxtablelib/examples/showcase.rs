//! Print a few sample tables.

use boxtablelib::{render, CellValue, RenderOptions, Table};

fn main() -> boxtablelib::Result<()> {
    let names = vec![
        vec!["Lemon"],
        vec!["Sebastiaan"],
        vec!["KutieKatj9"],
        vec!["Jake"],
        vec!["Not Joe"],
    ];
    println!("{}", render(&names, None::<&[&str]>, false)?);

    let users: Vec<Vec<CellValue>> = vec![
        vec!["Lemon".into(), 183285.into(), "Owner".into()],
        vec!["Sebastiaan".into(), 183285.1.into(), "Owner".into()],
        vec!["KutieKatj".into(), 15000.into(), "Admin".into()],
        vec!["Jake".into(), "MoreThanU".into(), "Helper".into()],
        vec!["Joe".into(), (-12).into(), "Idk Tbh".into()],
    ];
    println!(
        "{}",
        render(&users, Some(&["User", "Messages", "Role"][..]), false)?
    );

    let ducks = Table::from_rows(vec![
        vec![CellValue::from("Ducky Yellow"), CellValue::from(3)],
        vec![CellValue::from("Ducky Dave"), CellValue::from(12)],
        vec![CellValue::from("Ducky Tube"), CellValue::from(7)],
        vec![CellValue::from("Ducky Lemon"), CellValue::from(1)],
    ])
    .with_labels(["Name", "Duckiness"]);
    println!("{}", ducks.render(&RenderOptions::new().centered(true))?);

    Ok(())
}
