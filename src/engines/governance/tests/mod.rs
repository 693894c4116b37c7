mod validators;
