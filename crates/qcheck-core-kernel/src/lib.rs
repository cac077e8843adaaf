pub mod cpu_tolerance;
