pub mod city;
pub mod country;
pub mod population;
pub mod shared;
