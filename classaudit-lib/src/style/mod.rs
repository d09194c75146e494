pub mod class_rules;
