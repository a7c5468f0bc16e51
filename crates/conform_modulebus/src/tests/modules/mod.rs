mod create_file;
