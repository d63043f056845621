// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Property-based tests for the polynomial ring laws and the canonical form.
