fn main() {
    multiversx_sc_meta_lib::cli_main::<wrapper_mock::AbiProvider>();
}
