use clap::Parser;

use crate::{
    catalog::{View, all_ranges, register_names},
    prelude::*,
    tables::build_registers_table,
};

#[derive(Parser)]
pub struct RegistersArgs {
    /// Only print the ranges of this view.
    #[clap(value_enum)]
    pub view: Option<View>,
}

impl RegistersArgs {
    pub fn run(&self) {
        let ranges = self.view.map_or_else(all_ranges, |view| view.ranges().to_vec());
        println!("{}", build_registers_table(&ranges));
        info!(n_ranges = ranges.len(), n_registers = register_names(&ranges).len(), "listed");
    }
}
